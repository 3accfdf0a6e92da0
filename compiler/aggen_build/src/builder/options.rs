//! Generation options from the aggregate attribute's named arguments.

use aggen_ir::{Accessibility, GeneratedTypeKind, GeneratedTypeLocation, GenerationOptions};

use crate::facts::{AttributeFacts, ConstantValue};

/// Read an enum-typed argument given either as an ordinal or a member name.
fn enum_argument<T>(
    value: Option<&ConstantValue>,
    from_ordinal: fn(i64) -> Option<T>,
    from_name: fn(&str) -> Option<T>,
) -> Option<T> {
    match value? {
        ConstantValue::Int(ordinal) => from_ordinal(*ordinal),
        ConstantValue::UInt(ordinal) => i64::try_from(*ordinal).ok().and_then(from_ordinal),
        ConstantValue::Enum { member, .. } => from_name(member),
        _ => None,
    }
}

/// Derive options; absent or malformed arguments keep their defaults.
pub(super) fn derive(attribute: &AttributeFacts) -> GenerationOptions {
    let custom_name = attribute.named("CustomName").and_then(ConstantValue::as_str);

    let accessibility = enum_argument(
        attribute
            .named("Accessibility")
            .or_else(|| attribute.named("Visibility")),
        Accessibility::from_ordinal,
        Accessibility::from_name,
    )
    .unwrap_or_default();

    let is_sealed = attribute
        .named("IsSealed")
        .and_then(ConstantValue::as_bool)
        .unwrap_or(false);

    let kind = enum_argument(
        attribute.named("Kind"),
        GeneratedTypeKind::from_ordinal,
        GeneratedTypeKind::from_name,
    )
    .unwrap_or_default();

    let location = enum_argument(
        attribute.named("Location"),
        GeneratedTypeLocation::from_ordinal,
        GeneratedTypeLocation::from_name,
    )
    .unwrap_or_default();

    GenerationOptions::new(custom_name, accessibility, is_sealed, kind, location)
}
