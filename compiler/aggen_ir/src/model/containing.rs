use crate::{MemoSeq, TypeParameter};

/// Classification of an enclosing type declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainingTypeKind {
    Class,
    Struct,
    Interface,
    /// Any other enclosing construct (module-like containers, enums, ...).
    Unsupported,
}

impl ContainingTypeKind {
    /// Declaration keyword used when re-opening the type.
    ///
    /// `Unsupported` falls back to `class` so the emitted scope still parses.
    pub fn keyword(self) -> &'static str {
        match self {
            ContainingTypeKind::Class | ContainingTypeKind::Unsupported => "class",
            ContainingTypeKind::Struct => "struct",
            ContainingTypeKind::Interface => "interface",
        }
    }
}

/// One level of the lexical nesting around the aggregate interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainingType {
    pub kind: ContainingTypeKind,
    /// Only meaningful for `Class` and `Struct`.
    pub is_record: bool,
    pub name: String,
    pub type_parameters: MemoSeq<TypeParameter>,
}

impl ContainingType {
    pub fn new(
        kind: ContainingTypeKind,
        is_record: bool,
        name: impl Into<String>,
        type_parameters: impl Into<MemoSeq<TypeParameter>>,
    ) -> Self {
        Self {
            kind,
            is_record,
            name: name.into(),
            type_parameters: type_parameters.into(),
        }
    }

    /// Whether the `record` modifier applies to this level.
    pub fn renders_as_record(&self) -> bool {
        self.is_record && matches!(self.kind, ContainingTypeKind::Class | ContainingTypeKind::Struct)
    }
}
