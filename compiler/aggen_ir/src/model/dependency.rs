/// One injectable dependency slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependencyInfo {
    /// Fully-qualified type name (`global::App.IClock`), without the
    /// nullable marker.
    pub type_name: String,
    /// Declared property name.
    pub name: String,
    /// Ready-to-emit key literal for keyed registrations.
    pub key: Option<String>,
    pub optional: bool,
}

impl DependencyInfo {
    pub fn required(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            key: None,
            optional: false,
        }
    }

    pub fn optional(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::required(type_name, name)
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}
