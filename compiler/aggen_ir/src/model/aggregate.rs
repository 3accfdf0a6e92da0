use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::naming;
use crate::{ContainingType, DependencyInfo, GenerationOptions, MemoSeq, TypeParameter};

/// Complete structural model of one aggregate declaration.
///
/// This is the unit of memoization: two values are equal iff every field is
/// equal, sequence fields element-wise and in order. Nothing that cannot
/// influence the emitted text is stored here.
///
/// # Salsa Compatibility
///
/// Has all required traits: Clone, Eq, `PartialEq`, Hash, Debug
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateInfo {
    /// Declared namespace, as displayed by the host (may carry `global::`).
    /// Empty for the global namespace.
    pub namespace: String,
    /// Simple name of the aggregate interface.
    pub interface_name: String,
    /// Enclosing types, outermost first.
    pub containing_types: MemoSeq<ContainingType>,
    /// Generic parameters of the interface itself.
    pub type_parameters: MemoSeq<TypeParameter>,
    /// Dependencies, required before optional.
    pub dependencies: MemoSeq<DependencyInfo>,
    pub options: GenerationOptions,
}

impl AggregateInfo {
    /// Name of the generated type: the custom name if configured, otherwise
    /// the interface name without its leading marker character.
    pub fn generated_name(&self) -> &str {
        self.options
            .custom_name()
            .unwrap_or_else(|| naming::implementation_name(&self.interface_name))
    }

    /// Namespace without the `global::` qualifier, or `None` when blank.
    pub fn declared_namespace(&self) -> Option<&str> {
        let ns = naming::strip_global_prefix(self.namespace.trim());
        if ns.is_empty() {
            None
        } else {
            Some(ns)
        }
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Deterministic 64-bit digest of the whole model.
    ///
    /// Stable across processes, so it can key on-disk caches.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
