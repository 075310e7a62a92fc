//! Signature parser for the apiextractor pipeline.
//!
//! This crate turns compact, hand-written function signature strings into
//! structured [`FunctionDescriptor`](apiextractor_core::FunctionDescriptor)s
//! without a full language grammar. Signatures may contain nested template
//! angle brackets, pointers, references, varargs, default-value expressions
//! and arbitrary embedded whitespace:
//!
//! ```
//! use apiextractor_parser::parse;
//!
//! let f = parse("func(int, const B&, ...)", "void").unwrap();
//! assert_eq!(f.name, "func");
//! assert_eq!(f.arguments.len(), 3);
//! assert!(f.arguments[2].type_use.is_varargs);
//! ```
//!
//! Parsing is a pure function with no external state; it is invoked both by
//! the type-system loader (to build added-function descriptors) and by the
//! merge engine (to normalize directive signature keys).

pub mod signature;

pub use signature::{normalize_signature, parse, parse_type_use};
