//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash computed from a type name,
//! and [`TypeRef`], the opaque identity handed out by the type registry.
//! Hashes are deterministic, so the same name always produces the same
//! identity regardless of registration order.
//!
//! # Examples
//!
//! ```
//! use apiextractor_core::TypeHash;
//!
//! let a = TypeHash::from_name("int");
//! let b = TypeHash::from_name("int");
//! assert_eq!(a, b);
//!
//! let c = TypeHash::from_name("float");
//! assert_ne!(a, c);
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Domain-mixing constants for hash computation.
///
/// Seeding with a domain constant keeps type hashes distinct from any other
/// hashed namespace (e.g. function keys) even when the names collide.
pub mod hash_constants {
    /// Seed for type-name hashes.
    pub const TYPE: u64 = 0x7c61_c1a4_3f02_9d5b;

    /// Seed for normalized function-signature hashes.
    pub const FUNCTION: u64 = 0x19be_4a03_d8e6_72cf;
}

/// A deterministic 64-bit hash identifying a type by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Compute the hash for a type name.
    pub fn from_name(name: &str) -> Self {
        TypeHash(xxh64(name.as_bytes(), hash_constants::TYPE))
    }

    /// Compute the hash for a normalized function signature.
    pub fn from_signature(signature: &str) -> Self {
        TypeHash(xxh64(signature.as_bytes(), hash_constants::FUNCTION))
    }

    /// Get the raw hash value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Opaque identity of a registered type.
///
/// A `TypeRef` is only issued by the registry (through
/// [`TypeEntry::type_ref`](crate::TypeEntry::type_ref) on a registered
/// entry); downstream code never builds one from scratch. Equality is
/// identity equality: two refs compare equal exactly when they denote the
/// same registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef(TypeHash);

impl TypeRef {
    pub(crate) const fn new(hash: TypeHash) -> Self {
        TypeRef(hash)
    }

    /// The underlying identity hash.
    pub const fn hash(self) -> TypeHash {
        self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
