//! Enumeration type entry.

use crate::TypeHash;

/// Catalog entry for an enumeration type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Declared name.
    pub name: String,
    /// Identity hash, computed from the name.
    pub type_hash: TypeHash,
    /// Enumerator names, in declaration order.
    pub values: Vec<String>,
}

impl EnumEntry {
    /// Create an enum entry with no enumerators.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            values: Vec::new(),
        }
    }

    /// Add an enumerator.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Whether the enum declares a given enumerator.
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
