//! How a keyed dependency is spelled on its constructor parameter.

use std::fmt;

use crate::ScopedWriter;

/// Writes the attribute that binds a parameter to a keyed registration.
///
/// Called directly before the parameter type; implementations write the
/// attribute followed by a single space.
pub trait KeyAttributeSyntax: Send + Sync + fmt::Debug {
    fn write_key_attribute(&self, out: &mut ScopedWriter, key: &str);
}

/// `Microsoft.Extensions.DependencyInjection` keyed services.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FromKeyedServices;

impl KeyAttributeSyntax for FromKeyedServices {
    fn write_key_attribute(&self, out: &mut ScopedWriter, key: &str) {
        out.write("[global::Microsoft.Extensions.DependencyInjection.FromKeyedServicesAttribute(");
        out.write(key);
        out.write(")] ");
    }
}

/// Any attribute taking the key as its single constructor argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyAttribute {
    /// Fully-qualified attribute type, written verbatim.
    pub attribute_type: String,
}

impl KeyAttribute {
    pub fn new(attribute_type: impl Into<String>) -> Self {
        Self {
            attribute_type: attribute_type.into(),
        }
    }
}

impl KeyAttributeSyntax for KeyAttribute {
    fn write_key_attribute(&self, out: &mut ScopedWriter, key: &str) {
        out.write("[");
        out.write(&self.attribute_type);
        out.write("(");
        out.write(key);
        out.write(")] ");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_keyed_services_attribute() {
        let mut w = ScopedWriter::new();
        FromKeyedServices.write_key_attribute(&mut w, "\"primary\"");
        assert_eq!(
            w.take_output(),
            "[global::Microsoft.Extensions.DependencyInjection.FromKeyedServicesAttribute(\"primary\")] "
        );
    }

    #[test]
    fn custom_key_attribute() {
        let mut w = ScopedWriter::new();
        KeyAttribute::new("global::App.ServiceKeyAttribute").write_key_attribute(&mut w, "42");
        assert_eq!(w.take_output(), "[global::App.ServiceKeyAttribute(42)] ");
    }
}
