//! Resolved attribute argument values.

use serde::{Deserialize, Serialize};

/// A compile-time constant passed to an attribute.
///
/// Floating point values are stored as their IEEE-754 bits so the type keeps
/// `Eq` and `Hash`; use [`ConstantValue::float`] and
/// [`ConstantValue::as_f64`] to convert.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(#[serde(with = "float_bits")] u64),
    String(String),
    /// Enum member; `type_name` is the fully-qualified enum type.
    Enum { type_name: String, member: String },
    /// `typeof(...)` argument; the fully-qualified type.
    Type(String),
    Array {
        element_type: String,
        items: Vec<ConstantValue>,
    },
    /// The host could not evaluate the argument.
    Error,
}

impl ConstantValue {
    pub fn float(value: f64) -> Self {
        ConstantValue::Float(value.to_bits())
    }

    pub fn string(value: impl Into<String>) -> Self {
        ConstantValue::String(value.into())
    }

    pub fn enum_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        ConstantValue::Enum {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    pub fn type_of(type_name: impl Into<String>) -> Self {
        ConstantValue::Type(type_name.into())
    }

    /// The floating point value, for `Float` constants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConstantValue::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Boolean payload, for `Bool` constants.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstantValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// String payload, for `String` constants.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(value) => Some(value),
            _ => None,
        }
    }
}

/// Serde adapter: floats travel as numbers, live as bits.
mod float_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(
        clippy::trivially_copy_pass_by_ref,
        reason = "serde `with` modules receive fields by reference"
    )]
    pub fn serialize<S: Serializer>(bits: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(f64::from_bits(*bits))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        f64::deserialize(deserializer).map(f64::to_bits)
    }
}
