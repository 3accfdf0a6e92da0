use crate::MemoSeq;

/// A generic type parameter and its constraint clause.
///
/// `constraints` is already rendered and ordered: kind constraint first
/// (`class`, `struct`, `notnull` or `unmanaged`), then type constraints in
/// declaration order, then `new()`. An empty sequence means unconstrained.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeParameter {
    pub name: String,
    pub constraints: MemoSeq<String>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>, constraints: impl Into<MemoSeq<String>>) -> Self {
        Self {
            name: name.into(),
            constraints: constraints.into(),
        }
    }

    /// Unconstrained parameter.
    pub fn unconstrained(name: impl Into<String>) -> Self {
        Self::new(name, Vec::<String>::new())
    }

    #[inline]
    pub fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }
}
