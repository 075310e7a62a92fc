//! TypeUse - how a type is used at one signature position.
//!
//! A [`TypeUse`] is the textual, unresolved description of a type as it
//! appears in a hand-written signature: a base name plus the modifiers that
//! belong to this position (leading `const`, trailing `&`, trailing `*`
//! tokens). Template parameter lists stay inside `base_name` exactly as
//! written; only the enclosing substring is trimmed.
//!
//! # Example
//!
//! ```
//! use apiextractor_core::TypeUse;
//!
//! let t = TypeUse {
//!     base_name: "Abc<int&, C<char*>*>".to_string(),
//!     indirections: 2,
//!     is_reference: false,
//!     is_constant: true,
//!     is_varargs: false,
//! };
//! assert_eq!(t.to_string(), "const Abc<int&, C<char*>*>**");
//! assert_eq!(t.normalized(), "constAbc<int&,C<char*>*>**");
//! ```

use std::fmt;

/// Textual description of a type at one position (argument, return value).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeUse {
    /// The base type name, template parameter list included verbatim.
    pub base_name: String,
    /// Pointer depth: the number of trailing `*` tokens at template depth 0.
    pub indirections: usize,
    /// A trailing `&` belonged to this position.
    pub is_reference: bool,
    /// A leading `const` belonged to this position.
    pub is_constant: bool,
    /// This position is the `...` varargs marker; `base_name` is empty.
    pub is_varargs: bool,
}

impl TypeUse {
    /// Create a plain use of a named type, no modifiers.
    pub fn named(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// Create the varargs marker.
    pub fn varargs() -> Self {
        Self {
            is_varargs: true,
            ..Self::default()
        }
    }

    /// The whitespace-free key form used for directive matching.
    ///
    /// All whitespace is removed, including inside template parameter lists,
    /// so `Abc<int& , C<char*> * >` and `Abc<int&,C<char*>*>` normalize to
    /// the same key. Default expressions are never part of this form.
    pub fn normalized(&self) -> String {
        if self.is_varargs {
            return "...".to_string();
        }
        let mut out = String::with_capacity(self.base_name.len() + 8);
        if self.is_constant {
            out.push_str("const");
        }
        out.extend(self.base_name.chars().filter(|c| !c.is_whitespace()));
        for _ in 0..self.indirections {
            out.push('*');
        }
        if self.is_reference {
            out.push('&');
        }
        out
    }
}

impl fmt::Display for TypeUse {
    /// Re-serialize to signature syntax: `[const ]base[*...][&]` or `...`.
    ///
    /// Parsing the displayed form yields the identical `TypeUse` back, which
    /// is what makes signature parsing round-trippable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_varargs {
            return write!(f, "...");
        }
        if self.is_constant {
            write!(f, "const ")?;
        }
        write!(f, "{}", self.base_name)?;
        for _ in 0..self.indirections {
            write!(f, "*")?;
        }
        if self.is_reference {
            write!(f, "&")?;
        }
        Ok(())
    }
}
