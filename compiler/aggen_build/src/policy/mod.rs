//! Build policy: the tunable parts of model building.
//!
//! Which attributes mark a dependency as keyed or optional, how keys are
//! rendered, and how optionality is decided when the host does not track
//! nullability. Everything here is plain configuration; the builder itself
//! has no knobs.
//!
//! Attribute identities are compared with any leading `global::` removed, so
//! hosts may hand over either display form.

mod literals;

pub use literals::{CSharpLiterals, KeyLiteralRenderer};

use std::collections::BTreeSet;
use std::sync::Arc;

use aggen_ir::naming::strip_global_prefix;

/// Key marker recognized when nothing else is configured.
pub const DEFAULT_KEY_MARKER: &str = "global::Diogen.Generators.KeyedAttribute";

/// Optional marker recognized when nothing else is configured.
pub const DEFAULT_OPTIONAL_MARKER: &str = "global::Diogen.Generators.OptionalAttribute";

/// Compare two attribute identities, ignoring a `global::` qualifier.
pub fn same_attribute(a: &str, b: &str) -> bool {
    strip_global_prefix(a.trim()) == strip_global_prefix(b.trim())
}

/// The set of attributes that mark a property as keyed.
///
/// Stored without the `global::` qualifier, in sorted order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyMarkers(BTreeSet<String>);

impl KeyMarkers {
    /// An empty set: no property is ever keyed.
    pub fn new() -> Self {
        KeyMarkers(BTreeSet::new())
    }

    /// Add a marker. Returns `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        self.0.insert(normalize(name))
    }

    /// Remove a marker. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.0.remove(strip_global_prefix(name.trim()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(strip_global_prefix(name.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KeyMarkers {
    fn default() -> Self {
        let mut markers = KeyMarkers::new();
        markers.insert(DEFAULT_KEY_MARKER);
        markers
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeyMarkers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeyMarkers(iter.into_iter().map(|s| normalize(s.as_ref())).collect())
    }
}

fn normalize(name: &str) -> String {
    strip_global_prefix(name.trim()).to_string()
}

/// Optionality of properties whose type carries no nullable annotation state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObliviousOptionality {
    /// Optional iff the property carries the optional marker attribute.
    #[default]
    OptionalMarker,
    /// Always required.
    Required,
    /// Always optional.
    Optional,
}

impl ObliviousOptionality {
    /// Parse the command-line spelling (`marker`, `required`, `optional`).
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "marker" => Some(ObliviousOptionality::OptionalMarker),
            "required" => Some(ObliviousOptionality::Required),
            "optional" => Some(ObliviousOptionality::Optional),
            _ => None,
        }
    }
}

/// Configuration consumed by [`build`](crate::build).
#[derive(Clone, Debug)]
pub struct BuildPolicy {
    /// Identity of the aggregate attribute. When set, declarations whose
    /// attribute has a different type are not built.
    pub aggregate_attribute: Option<String>,
    pub key_markers: KeyMarkers,
    pub optional_marker: String,
    pub oblivious_optionality: ObliviousOptionality,
    pub key_literals: Arc<dyn KeyLiteralRenderer>,
}

impl Default for BuildPolicy {
    fn default() -> Self {
        BuildPolicy {
            aggregate_attribute: None,
            key_markers: KeyMarkers::default(),
            optional_marker: DEFAULT_OPTIONAL_MARKER.to_string(),
            oblivious_optionality: ObliviousOptionality::default(),
            key_literals: Arc::new(CSharpLiterals),
        }
    }
}

impl BuildPolicy {
    #[must_use]
    pub fn with_aggregate_attribute(mut self, name: impl Into<String>) -> Self {
        self.aggregate_attribute = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_key_marker(mut self, name: &str) -> Self {
        self.key_markers.insert(name);
        self
    }

    #[must_use]
    pub fn with_optional_marker(mut self, name: impl Into<String>) -> Self {
        self.optional_marker = name.into();
        self
    }

    #[must_use]
    pub fn with_oblivious_optionality(mut self, mode: ObliviousOptionality) -> Self {
        self.oblivious_optionality = mode;
        self
    }

    #[must_use]
    pub fn with_key_literals(mut self, renderer: Arc<dyn KeyLiteralRenderer>) -> Self {
        self.key_literals = renderer;
        self
    }

    /// Whether the declaration's attribute is the one this policy builds.
    pub fn accepts_attribute(&self, type_name: &str) -> bool {
        self.aggregate_attribute
            .as_deref()
            .map_or(true, |expected| same_attribute(expected, type_name))
    }

    pub fn is_key_marker(&self, type_name: &str) -> bool {
        self.key_markers.contains(type_name)
    }

    pub fn is_optional_marker(&self, type_name: &str) -> bool {
        same_attribute(&self.optional_marker, type_name)
    }
}

#[cfg(test)]
mod tests;
