//! Deterministic output unit names.
//!
//! `Test.Services.Outer`1.Dependencies.cs`: namespace, every containing
//! type with its generic arity, the interface itself when the generated type
//! is nested in it, then the generated type. Containing types are always
//! included so same-named interfaces in different containers never collide.

use aggen_ir::naming::with_arity;
use aggen_ir::AggregateInfo;

/// Extension of every emitted unit.
pub const UNIT_EXTENSION: &str = ".cs";

pub fn unit_name(info: &AggregateInfo) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(info.containing_types.len() + 3);

    if let Some(ns) = info.declared_namespace() {
        segments.push(ns.to_string());
    }

    for containing in info.containing_types.iter() {
        segments.push(with_arity(&containing.name, containing.type_parameters.len()));
    }

    let generated_arity = if info.options.is_nested() {
        segments.push(with_arity(&info.interface_name, info.type_parameters.len()));
        0
    } else {
        info.type_parameters.len()
    };
    segments.push(with_arity(info.generated_name(), generated_arity));

    let mut name = segments.join(".");
    name.push_str(UNIT_EXTENSION);
    name
}

#[cfg(test)]
mod tests;
