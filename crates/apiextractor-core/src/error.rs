//! Unified error types for the extraction pipeline.
//!
//! Each phase has its own error enum, convertible into the top-level
//! [`ExtractorError`] for unified handling:
//!
//! ```text
//! ExtractorError
//! ├── SignatureError - signature text fails to tokenize
//! ├── RegistryError  - type registration conflicts
//! └── MergeError     - type resolution and directive application failures
//! ```
//!
//! Failures are structured values, never panics: the merger reports the
//! scope, the offending item, and the candidates it considered, so a
//! swallowed directive can never silently change generated code downstream.

use std::fmt;

use thiserror::Error;

/// Errors from parsing a hand-written signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The text fails to tokenize.
    #[error("malformed signature '{text}': {reason}")]
    MalformedSignature {
        /// The offending signature text, verbatim.
        text: String,
        /// What went wrong.
        reason: String,
    },
}

impl SignatureError {
    /// Create a malformed-signature error.
    pub fn malformed(text: impl Into<String>, reason: impl Into<String>) -> Self {
        SignatureError::MalformedSignature {
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from populating the type registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A type with the same name is already registered.
    #[error("duplicate type '{name}'")]
    DuplicateType {
        /// The conflicting name.
        name: String,
    },
}

/// Which position of a function a type reference occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    /// The return type.
    Return,
    /// An argument, 1-based.
    Argument(usize),
}

impl fmt::Display for TypePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePosition::Return => write!(f, "return type"),
            TypePosition::Argument(index) => write!(f, "argument {index}"),
        }
    }
}

/// Errors from merging one scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A type use names a type absent from the registry.
    #[error("unknown type '{type_name}' at {position} of '{function}' in {scope}")]
    UnknownType {
        /// The scope being merged, displayed.
        scope: String,
        /// The function being resolved.
        function: String,
        /// Return type or argument index.
        position: TypePosition,
        /// The unresolvable base name.
        type_name: String,
    },

    /// A directive's key matched zero or more than one function.
    #[error(
        "directive {directive} '{key}' in {scope} matched {matched} functions \
         (candidates: {candidates:?})"
    )]
    UnresolvedDirective {
        /// The scope being merged, displayed.
        scope: String,
        /// The directive kind name.
        directive: &'static str,
        /// The normalized signature key.
        key: String,
        /// How many functions matched.
        matched: usize,
        /// Normalized signatures considered: the matches when ambiguous,
        /// every function in scope when nothing matched.
        candidates: Vec<String>,
    },

    /// A default-value replacement addressed a nonexistent argument.
    #[error(
        "argument index {index} out of range for '{function}' in {scope} \
         ({count} arguments)"
    )]
    ArgumentIndexOutOfRange {
        /// The scope being merged, displayed.
        scope: String,
        /// The target function.
        function: String,
        /// The 1-based index the directive named.
        index: usize,
        /// The function's actual argument count.
        count: usize,
    },
}

/// Top-level error wrapper for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractorError {
    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}
