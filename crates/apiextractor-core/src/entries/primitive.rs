//! Primitive type entry.

use crate::TypeHash;

/// Catalog entry for a primitive type.
///
/// Primitives are declared by the type-system description (`int`, `char`,
/// `double`, ...). They carry no members, only a name, an identity hash and
/// optionally the name the target language knows them by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveEntry {
    /// Declared name.
    pub name: String,
    /// Identity hash, computed from the name.
    pub type_hash: TypeHash,
    /// Name used in the target language, when it differs.
    pub target_lang_name: Option<String>,
}

impl PrimitiveEntry {
    /// Create a primitive entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            target_lang_name: None,
        }
    }

    /// Set the target-language name.
    pub fn with_target_lang_name(mut self, name: impl Into<String>) -> Self {
        self.target_lang_name = Some(name.into());
        self
    }

    /// The name the target language sees: the override if set, otherwise
    /// the declared name.
    pub fn target_lang_api_name(&self) -> &str {
        self.target_lang_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_entry_basic() {
        let entry = PrimitiveEntry::new("int");
        assert_eq!(entry.name, "int");
        assert_eq!(entry.type_hash, TypeHash::from_name("int"));
        assert_eq!(entry.target_lang_api_name(), "int");
    }

    #[test]
    fn target_lang_name_override() {
        let entry = PrimitiveEntry::new("qreal").with_target_lang_name("double");
        assert_eq!(entry.target_lang_api_name(), "double");
    }
}
