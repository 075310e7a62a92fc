//! Visibility of functions and class members.

use std::fmt;

/// Visibility of a function within its owning class or module.
///
/// Added functions default to `Public` unless the type-system description
/// states otherwise; an access-override directive can change it after the
/// fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Lowercase keyword form, as it appears in type-system documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
