//! Containing-type chain.

use aggen_ir::{ContainingType, ContainingTypeKind};

use super::constraints;
use crate::facts::{DeclarationKind, EnclosingTypeFacts};

fn classify(kind: DeclarationKind) -> ContainingTypeKind {
    match kind {
        DeclarationKind::Class => ContainingTypeKind::Class,
        DeclarationKind::Struct => ContainingTypeKind::Struct,
        DeclarationKind::Interface => ContainingTypeKind::Interface,
        DeclarationKind::Enum
        | DeclarationKind::Delegate
        | DeclarationKind::Module
        | DeclarationKind::Other => ContainingTypeKind::Unsupported,
    }
}

/// Classify every enclosing level and reorder the chain outermost-first.
///
/// Facts arrive walking outward from the interface.
pub(super) fn chain(parents: &[EnclosingTypeFacts]) -> Vec<ContainingType> {
    parents
        .iter()
        .rev()
        .map(|parent| {
            ContainingType::new(
                classify(parent.kind),
                parent.is_record,
                parent.name.clone(),
                constraints::type_parameters(&parent.type_parameters),
            )
        })
        .collect()
}
