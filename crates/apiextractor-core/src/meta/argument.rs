//! Resolved types and arguments.

use std::fmt;

use crate::TypeRef;

/// A resolved type: registry identity plus the use-site modifiers.
///
/// The canonical `name` is kept alongside the [`TypeRef`] so code
/// generators and signature normalization never need a reverse registry
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaType {
    /// Registry identity of the base type.
    pub type_ref: TypeRef,
    /// Canonical name of the base type, as registered.
    pub name: String,
    /// Pointer depth.
    pub indirections: usize,
    /// Used by reference.
    pub is_reference: bool,
    /// Const at this use site.
    pub is_constant: bool,
    /// This is the varargs pseudo-type.
    pub is_varargs: bool,
}

impl MetaType {
    /// A plain, unmodified use of a resolved type.
    pub fn simple(type_ref: TypeRef, name: impl Into<String>) -> Self {
        Self {
            type_ref,
            name: name.into(),
            indirections: 0,
            is_reference: false,
            is_constant: false,
            is_varargs: false,
        }
    }

    /// The whitespace-free key form used for directive matching.
    ///
    /// Produces the same string as the parser side's normalization of the
    /// corresponding type use, which is what makes directive keys line up
    /// with merged functions.
    pub fn normalized(&self) -> String {
        if self.is_varargs {
            return "...".to_string();
        }
        let mut out = String::with_capacity(self.name.len() + 8);
        if self.is_constant {
            out.push_str("const");
        }
        out.extend(self.name.chars().filter(|c| !c.is_whitespace()));
        for _ in 0..self.indirections {
            out.push('*');
        }
        if self.is_reference {
            out.push('&');
        }
        out
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_varargs {
            return write!(f, "...");
        }
        if self.is_constant {
            write!(f, "const ")?;
        }
        write!(f, "{}", self.name)?;
        for _ in 0..self.indirections {
            write!(f, "*")?;
        }
        if self.is_reference {
            write!(f, "&")?;
        }
        Ok(())
    }
}

/// One resolved function argument.
///
/// Mutable only while directives are applied (default-value replacement);
/// immutable once merge finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaArgument {
    /// Resolved argument type.
    pub meta_type: MetaType,
    /// Default-value expression, verbatim.
    pub default_expression: Option<String>,
}

impl MetaArgument {
    /// Create an argument with no default.
    pub fn new(meta_type: MetaType) -> Self {
        Self {
            meta_type,
            default_expression: None,
        }
    }

    /// Create an argument with a default expression.
    pub fn with_default(meta_type: MetaType, expression: impl Into<String>) -> Self {
        Self {
            meta_type,
            default_expression: Some(expression.into()),
        }
    }

    /// Whether the argument carries a default expression.
    pub fn has_default(&self) -> bool {
        self.default_expression.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrimitiveEntry, TypeEntry};

    fn int_type() -> MetaType {
        let entry: TypeEntry = PrimitiveEntry::new("int").into();
        MetaType::simple(entry.type_ref(), "int")
    }

    #[test]
    fn normalized_matches_parser_form() {
        let mut t = int_type();
        t.is_constant = true;
        t.indirections = 2;
        assert_eq!(t.normalized(), "constint**");
    }

    #[test]
    fn display_readable_form() {
        let mut t = int_type();
        t.is_constant = true;
        t.is_reference = true;
        assert_eq!(t.to_string(), "const int&");
    }

    #[test]
    fn argument_default() {
        let arg = MetaArgument::with_default(int_type(), "42");
        assert!(arg.has_default());
        assert_eq!(arg.default_expression.as_deref(), Some("42"));
    }
}
