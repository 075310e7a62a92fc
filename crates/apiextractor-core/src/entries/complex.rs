//! Complex type entries: value, object, and container types.

use crate::TypeHash;

/// Catalog entry for a value type (copy semantics in the target language).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEntry {
    /// Declared name.
    pub name: String,
    /// Identity hash, computed from the name.
    pub type_hash: TypeHash,
}

impl ValueEntry {
    /// Create a value-type entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self { name, type_hash }
    }
}

/// Catalog entry for an object type (reference semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Declared name.
    pub name: String,
    /// Identity hash, computed from the name.
    pub type_hash: TypeHash,
}

impl ObjectEntry {
    /// Create an object-type entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self { name, type_hash }
    }
}

/// Catalog entry for a container type.
///
/// The name includes the instantiated template parameter list when the
/// type-system description declares one (e.g. `QList<int>`); lookup is
/// whitespace-insensitive on the registry side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEntry {
    /// Declared name, template parameters included.
    pub name: String,
    /// Identity hash, computed from the name.
    pub type_hash: TypeHash,
}

impl ContainerEntry {
    /// Create a container-type entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self { name, type_hash }
    }
}
