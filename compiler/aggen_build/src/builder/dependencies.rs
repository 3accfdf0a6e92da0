//! Dependency selection, optionality, keys and ordering.

use aggen_ir::DependencyInfo;

use crate::facts::{MemberAccessibility, Nullability, PropertyFacts};
use crate::policy::{BuildPolicy, ObliviousOptionality};

/// Public, abstract, instance, get-only properties are dependency slots.
fn is_slot(property: &PropertyFacts) -> bool {
    property.accessibility == MemberAccessibility::Public
        && property.is_abstract
        && !property.is_static
        && property.is_read_only
}

fn is_optional(property: &PropertyFacts, policy: &BuildPolicy) -> bool {
    match property.nullability {
        Nullability::Annotated => true,
        Nullability::NotAnnotated => false,
        Nullability::Oblivious => match policy.oblivious_optionality {
            ObliviousOptionality::Required => false,
            ObliviousOptionality::Optional => true,
            ObliviousOptionality::OptionalMarker => property
                .attributes
                .iter()
                .any(|attr| policy.is_optional_marker(&attr.type_name)),
        },
    }
}

/// Key literal from the first key marker on the property.
///
/// A marker without arguments, or whose first argument has no literal form,
/// leaves the dependency unkeyed.
fn key(property: &PropertyFacts, policy: &BuildPolicy) -> Option<String> {
    let marker = property
        .attributes
        .iter()
        .find(|attr| policy.is_key_marker(&attr.type_name))?;
    let argument = marker.constructor_arguments.first()?;
    policy.key_literals.render(argument)
}

/// Select dependency slots, required first, declaration order within groups.
pub(super) fn collect(properties: &[PropertyFacts], policy: &BuildPolicy) -> Vec<DependencyInfo> {
    let mut dependencies: Vec<DependencyInfo> = properties
        .iter()
        .filter(|property| is_slot(property))
        .map(|property| DependencyInfo {
            type_name: property.type_name.clone(),
            name: property.name.clone(),
            key: key(property, policy),
            optional: is_optional(property, policy),
        })
        .collect();

    // `sort_by_key` is stable.
    dependencies.sort_by_key(|dep| dep.optional);
    dependencies
}
