//! Type parameter constraint clauses.

use aggen_ir::TypeParameter;

use crate::facts::{ConstraintFlags, TypeParameterFacts};

/// Kind constraints in precedence order; at most one is emitted.
const KIND_CONSTRAINTS: [(ConstraintFlags, &str); 4] = [
    (ConstraintFlags::REFERENCE_TYPE, "class"),
    (ConstraintFlags::VALUE_TYPE, "struct"),
    (ConstraintFlags::NOT_NULL, "notnull"),
    (ConstraintFlags::UNMANAGED, "unmanaged"),
];

/// Render one parameter's constraint list: kind, types, then `new()`.
pub(super) fn type_parameter(facts: &TypeParameterFacts) -> TypeParameter {
    let mut constraints = Vec::with_capacity(facts.constraint_types.len() + 2);

    if let Some((_, keyword)) = KIND_CONSTRAINTS
        .iter()
        .find(|(flag, _)| facts.flags.contains(*flag))
    {
        constraints.push((*keyword).to_string());
    }

    constraints.extend(facts.constraint_types.iter().cloned());

    if facts.flags.contains(ConstraintFlags::CONSTRUCTOR) {
        constraints.push("new()".to_string());
    }

    TypeParameter::new(facts.name.clone(), constraints)
}

pub(super) fn type_parameters(facts: &[TypeParameterFacts]) -> Vec<TypeParameter> {
    facts.iter().map(type_parameter).collect()
}
