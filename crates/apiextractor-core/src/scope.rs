//! Enclosing scopes for directives and added functions.

use std::fmt;

/// The scope a directive or added function is registered against.
///
/// Directives and added functions attach either to a named class or to the
/// module (global) scope; the merger processes each scope independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The module/global scope.
    Module,
    /// A class scope, keyed by class name.
    Class(String),
}

impl Scope {
    /// Create a class scope.
    pub fn class(name: impl Into<String>) -> Self {
        Scope::Class(name.into())
    }

    /// The class name, if this is a class scope.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Scope::Module => None,
            Scope::Class(name) => Some(name),
        }
    }

    pub fn is_module(&self) -> bool {
        matches!(self, Scope::Module)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Module => write!(f, "module scope"),
            Scope::Class(name) => write!(f, "class '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_accessor() {
        assert_eq!(Scope::Module.class_name(), None);
        assert_eq!(Scope::class("A").class_name(), Some("A"));
    }

    #[test]
    fn display_names_the_scope() {
        assert_eq!(Scope::Module.to_string(), "module scope");
        assert_eq!(Scope::class("Widget").to_string(), "class 'Widget'");
    }
}
