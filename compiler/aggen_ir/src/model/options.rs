//! Generation options: how and where the companion type is emitted.

/// Declared accessibility of the generated type.
///
/// Variant order matches the ordinal values of the configuration attribute.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accessibility {
    Default,
    File,
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    #[default]
    Public,
}

impl Accessibility {
    const ALL: [Accessibility; 8] = [
        Accessibility::Default,
        Accessibility::File,
        Accessibility::Private,
        Accessibility::PrivateProtected,
        Accessibility::Protected,
        Accessibility::Internal,
        Accessibility::ProtectedInternal,
        Accessibility::Public,
    ];

    /// Look up by attribute ordinal.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Look up by enum member name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Default" => Accessibility::Default,
            "File" => Accessibility::File,
            "Private" => Accessibility::Private,
            "PrivateProtected" => Accessibility::PrivateProtected,
            "Protected" => Accessibility::Protected,
            "Internal" => Accessibility::Internal,
            "ProtectedInternal" => Accessibility::ProtectedInternal,
            "Public" => Accessibility::Public,
            _ => return None,
        })
    }

    /// Modifier text including its trailing space (empty for `Default`).
    pub fn modifier(self) -> &'static str {
        match self {
            Accessibility::Default => "",
            Accessibility::File => "file ",
            Accessibility::Private => "private ",
            Accessibility::PrivateProtected => "private protected ",
            Accessibility::Protected => "protected ",
            Accessibility::Internal => "internal ",
            Accessibility::ProtectedInternal => "protected internal ",
            Accessibility::Public => "public ",
        }
    }
}

/// Shape of the generated type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratedTypeKind {
    /// Positional record: the constructor parameters are the implementation.
    #[default]
    Record,
    /// Class with a primary constructor and explicit get-only properties.
    Class,
}

impl GeneratedTypeKind {
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(GeneratedTypeKind::Record),
            1 => Some(GeneratedTypeKind::Class),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Record" => Some(GeneratedTypeKind::Record),
            "Class" => Some(GeneratedTypeKind::Class),
            _ => None,
        }
    }

    /// Declaration keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            GeneratedTypeKind::Record => "record",
            GeneratedTypeKind::Class => "class",
        }
    }
}

/// Placement of the generated type relative to its source interface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneratedTypeLocation {
    /// Directly in the namespace, outside every containing type.
    TopLevel,
    /// Beside the interface, inside the same containing types.
    #[default]
    Sibling,
    /// Inside the interface itself.
    Nested,
}

impl GeneratedTypeLocation {
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(GeneratedTypeLocation::TopLevel),
            1 => Some(GeneratedTypeLocation::Sibling),
            2 => Some(GeneratedTypeLocation::Nested),
            _ => None,
        }
    }

    /// Look up by member name; `SameLevel` is the legacy spelling of `Sibling`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TopLevel" => Some(GeneratedTypeLocation::TopLevel),
            "Sibling" | "SameLevel" => Some(GeneratedTypeLocation::Sibling),
            "Nested" => Some(GeneratedTypeLocation::Nested),
            _ => None,
        }
    }
}

/// Per-declaration generation options.
///
/// Built through [`GenerationOptions::new`], which enforces that a custom
/// name is never blank.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationOptions {
    custom_name: Option<String>,
    pub accessibility: Accessibility,
    pub is_sealed: bool,
    pub kind: GeneratedTypeKind,
    pub location: GeneratedTypeLocation,
}

impl GenerationOptions {
    /// Create options, trimming the custom name and dropping it if blank.
    pub fn new(
        custom_name: Option<&str>,
        accessibility: Accessibility,
        is_sealed: bool,
        kind: GeneratedTypeKind,
        location: GeneratedTypeLocation,
    ) -> Self {
        let custom_name = custom_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self {
            custom_name,
            accessibility,
            is_sealed,
            kind,
            location,
        }
    }

    /// The trimmed, non-empty custom name, if configured.
    pub fn custom_name(&self) -> Option<&str> {
        self.custom_name.as_deref()
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        self.kind == GeneratedTypeKind::Class
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        self.location == GeneratedTypeLocation::Nested
    }
}
