//! TypeRegistry - the process-wide type catalog.
//!
//! # Storage Model
//!
//! Entries are stored by declared name. Two secondary indexes are kept:
//! a whitespace-stripped name index (hand-written template spellings like
//! `Abc<int& , C<char*> *>` must find `Abc<int&, C<char*>*>`), and a
//! hash-to-name index for reverse lookup from a [`TypeRef`].
//!
//! # Thread Safety
//!
//! The registry is populated single-threaded by the type-system loader
//! before any merge begins and is treated as immutable for the remainder of
//! the process, so reads after the population phase need no locking.
//!
//! # Example
//!
//! ```
//! use apiextractor_registry::TypeRegistry;
//! use apiextractor_core::PrimitiveEntry;
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(PrimitiveEntry::new("int")).unwrap();
//!
//! assert!(registry.find("int").is_some());
//! assert!(registry.type_ref("int").is_some());
//! assert!(registry.find("...").unwrap().is_varargs());
//! ```

use rustc_hash::FxHashMap;

use apiextractor_core::{RegistryError, TypeEntry, TypeRef, VARARGS_TYPE_NAME};

/// Catalog of type identities, keyed by declared name.
#[derive(Debug)]
pub struct TypeRegistry {
    /// Entries by declared name (primary storage).
    entries: FxHashMap<String, TypeEntry>,
    /// Whitespace-stripped name -> declared name.
    normalized_names: FxHashMap<String, String>,
    /// Reverse index for `TypeRef` lookups.
    ref_to_name: FxHashMap<TypeRef, String>,
}

impl TypeRegistry {
    /// Create a registry containing only the implicit varargs pseudo-type.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: FxHashMap::default(),
            normalized_names: FxHashMap::default(),
            ref_to_name: FxHashMap::default(),
        };
        registry
            .register(TypeEntry::Varargs)
            .expect("fresh registry cannot hold duplicates");
        registry
    }

    /// Register a type entry.
    ///
    /// Fails with [`RegistryError::DuplicateType`] when an entry with the
    /// same name already exists.
    pub fn register(&mut self, entry: impl Into<TypeEntry>) -> Result<TypeRef, RegistryError> {
        let entry = entry.into();
        let name = entry.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateType { name });
        }
        let type_ref = entry.type_ref();
        self.normalized_names
            .insert(strip_whitespace(&name), name.clone());
        self.ref_to_name.insert(type_ref, name.clone());
        self.entries.insert(name, entry);
        Ok(type_ref)
    }

    /// Find an entry by name.
    ///
    /// Exact match first; otherwise the whitespace-stripped spelling is
    /// tried, so template names match regardless of hand-written spacing.
    pub fn find(&self, name: &str) -> Option<&TypeEntry> {
        if let Some(entry) = self.entries.get(name) {
            return Some(entry);
        }
        let canonical = self.normalized_names.get(&strip_whitespace(name))?;
        self.entries.get(canonical)
    }

    /// Find a primitive entry by name.
    pub fn find_primitive(&self, name: &str) -> Option<&TypeEntry> {
        self.find(name).filter(|e| e.is_primitive())
    }

    /// The opaque identity for a name, if registered.
    pub fn type_ref(&self, name: &str) -> Option<TypeRef> {
        self.find(name).map(TypeEntry::type_ref)
    }

    /// The identity of the varargs pseudo-type.
    pub fn varargs_ref(&self) -> TypeRef {
        self.entries[VARARGS_TYPE_NAME].type_ref()
    }

    /// Reverse lookup: the declared name behind an identity.
    pub fn name_of(&self, type_ref: TypeRef) -> Option<&str> {
        self.ref_to_name.get(&type_ref).map(String::as_str)
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of registered entries, varargs included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, unordered.
    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
