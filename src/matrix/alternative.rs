//! Alternative definition.

use std::collections::BTreeMap;

/// A decision alternative: a row of the decision matrix.
///
/// Order matters only through row position; the metadata map is opaque
/// to the engine and carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// Stable identifier, chosen by the caller.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Opaque caller-owned annotations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: BTreeMap<String, String>,
}

impl Alternative {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attaches a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
