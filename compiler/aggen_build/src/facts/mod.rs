//! Raw declaration facts: the boundary with the host compiler.
//!
//! The host resolves attributes and symbols and hands over one `RawFacts`
//! per aggregate declaration. Every name is already fully qualified and every
//! attribute argument is already a literal value; the builder performs no name
//! resolution.
//!
//! Facts are plain data with serde support so a host in another process can
//! ship them as JSON. Fields that a host rarely needs to spell out carry serde
//! defaults matching the common case (a public abstract read-only property,
//! a resolved named type).
//!
//! # Salsa Compatibility
//!
//! Has all required traits: Clone, Eq, `PartialEq`, Hash, Debug

mod constant;

pub use constant::ConstantValue;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// What the declaration's target symbol resolved to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// A named type; the only buildable case.
    #[default]
    NamedType,
    /// The host produced an error symbol (typically mid-edit).
    Error,
    /// No symbol could be obtained for the syntax node.
    Missing,
}

/// Declaration kind of an enclosing type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    /// Module-like containers of other host languages.
    Module,
    Other,
}

/// Declared accessibility of a member, as reported by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberAccessibility {
    NotApplicable,
    Private,
    ProtectedAndInternal,
    Protected,
    Internal,
    ProtectedOrInternal,
    #[default]
    Public,
}

/// Nullable annotation state of a member type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nullability {
    /// Nullable context enabled, type not annotated: required.
    NotAnnotated,
    /// Nullable context enabled, type annotated with `?`: optional.
    Annotated,
    /// Nullability is not tracked for this type.
    #[default]
    Oblivious,
}

bitflags! {
    /// Special constraints declared on a type parameter.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ConstraintFlags: u8 {
        /// `class`
        const REFERENCE_TYPE = 1;
        /// `struct`
        const VALUE_TYPE = 1 << 1;
        /// `notnull`
        const NOT_NULL = 1 << 2;
        /// `unmanaged`
        const UNMANAGED = 1 << 3;
        /// `new()`
        const CONSTRUCTOR = 1 << 4;
    }
}

impl Default for ConstraintFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One named argument of an attribute (`Kind = GeneratedTypeKind.Class`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedArgument {
    pub name: String,
    pub value: ConstantValue,
}

/// An applied attribute with its resolved arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeFacts {
    /// Fully-qualified attribute class name.
    pub type_name: String,
    #[serde(default)]
    pub constructor_arguments: Vec<ConstantValue>,
    #[serde(default)]
    pub named_arguments: Vec<NamedArgument>,
}

impl AttributeFacts {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_argument(mut self, value: ConstantValue) -> Self {
        self.constructor_arguments.push(value);
        self
    }

    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: ConstantValue) -> Self {
        self.named_arguments.push(NamedArgument {
            name: name.into(),
            value,
        });
        self
    }

    /// First named argument with the given name.
    pub fn named(&self, name: &str) -> Option<&ConstantValue> {
        self.named_arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

/// A generic type parameter as declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameterFacts {
    pub name: String,
    #[serde(default)]
    pub flags: ConstraintFlags,
    /// Fully-qualified type constraints, in declaration order.
    #[serde(default)]
    pub constraint_types: Vec<String>,
}

impl TypeParameterFacts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: ConstraintFlags::empty(),
            constraint_types: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ConstraintFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_constraint_type(mut self, type_name: impl Into<String>) -> Self {
        self.constraint_types.push(type_name.into());
        self
    }
}

/// One enclosing type declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnclosingTypeFacts {
    pub kind: DeclarationKind,
    #[serde(default)]
    pub is_record: bool,
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterFacts>,
}

impl EnclosingTypeFacts {
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            is_record: false,
            name: name.into(),
            type_parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn record(mut self) -> Self {
        self.is_record = true;
        self
    }

    #[must_use]
    pub fn with_type_parameter(mut self, tp: TypeParameterFacts) -> Self {
        self.type_parameters.push(tp);
        self
    }
}

fn default_true() -> bool {
    true
}

/// One property member of the aggregate interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyFacts {
    pub name: String,
    /// Fully-qualified type name without the nullable annotation.
    pub type_name: String,
    #[serde(default)]
    pub accessibility: MemberAccessibility,
    /// `false` when the property has a default implementation.
    #[serde(default = "default_true")]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default = "default_true")]
    pub is_read_only: bool,
    #[serde(default)]
    pub nullability: Nullability,
    #[serde(default)]
    pub attributes: Vec<AttributeFacts>,
}

impl PropertyFacts {
    /// A public abstract get-only property with oblivious nullability.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            accessibility: MemberAccessibility::Public,
            is_abstract: true,
            is_static: false,
            is_read_only: true,
            nullability: Nullability::Oblivious,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_nullability(mut self, nullability: Nullability) -> Self {
        self.nullability = nullability;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeFacts) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Everything the host knows about one aggregate declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawFacts {
    #[serde(default)]
    pub symbol: SymbolKind,
    /// Fully-qualified namespace display string (`global::App.Services`),
    /// empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    pub interface_name: String,
    /// Enclosing types, immediate lexical parent first.
    #[serde(default)]
    pub containing_types: Vec<EnclosingTypeFacts>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterFacts>,
    /// Property members in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyFacts>,
    /// The aggregate attribute applied to the interface.
    #[serde(default)]
    pub attribute: AttributeFacts,
}

impl RawFacts {
    pub fn new(namespace: impl Into<String>, interface_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            interface_name: interface_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyFacts) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_type_parameter(mut self, tp: TypeParameterFacts) -> Self {
        self.type_parameters.push(tp);
        self
    }

    /// Push the next enclosing type, walking outward from the interface.
    #[must_use]
    pub fn within(mut self, parent: EnclosingTypeFacts) -> Self {
        self.containing_types.push(parent);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeFacts) -> Self {
        self.attribute = attribute;
        self
    }
}
