//! TypeEntry enum for unified catalog storage.

use crate::{TypeHash, TypeRef};

use super::{ContainerEntry, EnumEntry, ObjectEntry, PrimitiveEntry, VARARGS_TYPE_NAME, ValueEntry};

/// Unified catalog entry for registry storage.
///
/// Wraps every type kind the type-system description can declare, plus the
/// implicit varargs pseudo-type, in a single enum for uniform storage and
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    /// Primitive type (int, char, double, ...).
    Primitive(PrimitiveEntry),
    /// Value type.
    Value(ValueEntry),
    /// Object type.
    Object(ObjectEntry),
    /// Enumeration type.
    Enum(EnumEntry),
    /// Container type.
    Container(ContainerEntry),
    /// The implicit `...` varargs pseudo-type.
    Varargs,
}

impl TypeEntry {
    /// The declared name of this entry.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Primitive(e) => &e.name,
            TypeEntry::Value(e) => &e.name,
            TypeEntry::Object(e) => &e.name,
            TypeEntry::Enum(e) => &e.name,
            TypeEntry::Container(e) => &e.name,
            TypeEntry::Varargs => VARARGS_TYPE_NAME,
        }
    }

    /// The identity hash of this entry.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(e) => e.type_hash,
            TypeEntry::Value(e) => e.type_hash,
            TypeEntry::Object(e) => e.type_hash,
            TypeEntry::Enum(e) => e.type_hash,
            TypeEntry::Container(e) => e.type_hash,
            TypeEntry::Varargs => TypeHash::from_name(VARARGS_TYPE_NAME),
        }
    }

    /// The opaque identity downstream code holds on to.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.type_hash())
    }

    // === Kind checks ===

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, TypeEntry::Value(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeEntry::Object(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, TypeEntry::Enum(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, TypeEntry::Container(_))
    }

    pub fn is_varargs(&self) -> bool {
        matches!(self, TypeEntry::Varargs)
    }

    // === Downcasting ===

    /// Get as a primitive entry.
    pub fn as_primitive(&self) -> Option<&PrimitiveEntry> {
        match self {
            TypeEntry::Primitive(e) => Some(e),
            _ => None,
        }
    }

    /// Get as an enum entry.
    pub fn as_enum(&self) -> Option<&EnumEntry> {
        match self {
            TypeEntry::Enum(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveEntry> for TypeEntry {
    fn from(e: PrimitiveEntry) -> Self {
        TypeEntry::Primitive(e)
    }
}

impl From<ValueEntry> for TypeEntry {
    fn from(e: ValueEntry) -> Self {
        TypeEntry::Value(e)
    }
}

impl From<ObjectEntry> for TypeEntry {
    fn from(e: ObjectEntry) -> Self {
        TypeEntry::Object(e)
    }
}

impl From<EnumEntry> for TypeEntry {
    fn from(e: EnumEntry) -> Self {
        TypeEntry::Enum(e)
    }
}

impl From<ContainerEntry> for TypeEntry {
    fn from(e: ContainerEntry) -> Self {
        TypeEntry::Container(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varargs_entry_name_and_identity() {
        let entry = TypeEntry::Varargs;
        assert!(entry.is_varargs());
        assert_eq!(entry.name(), "...");
        assert_eq!(entry.type_hash(), TypeHash::from_name("..."));
    }

    #[test]
    fn kind_checks_are_exclusive() {
        let entry: TypeEntry = PrimitiveEntry::new("int").into();
        assert!(entry.is_primitive());
        assert!(!entry.is_value());
        assert!(entry.as_primitive().is_some());
        assert!(entry.as_enum().is_none());
    }

    #[test]
    fn same_name_same_ref() {
        let a: TypeEntry = ValueEntry::new("B").into();
        let b: TypeEntry = ValueEntry::new("B").into();
        assert_eq!(a.type_ref(), b.type_ref());
    }
}
