//! Type catalog entries.
//!
//! This module provides the entry kinds stored in the type registry:
//!
//! - [`TypeEntry`] - unified enum wrapping all entry kinds
//! - [`PrimitiveEntry`] - built-in primitive types
//! - [`ValueEntry`], [`ObjectEntry`], [`ContainerEntry`] - complex types
//! - [`EnumEntry`] - enumeration types
//!
//! The varargs pseudo-type (`...`) is a variant of [`TypeEntry`] itself; it
//! has no declaration of its own but resolves like any other type so a
//! varargs argument carries a real identity.

mod complex;
mod enum_entry;
mod primitive;
mod type_entry;

pub use complex::{ContainerEntry, ObjectEntry, ValueEntry};
pub use enum_entry::EnumEntry;
pub use primitive::PrimitiveEntry;
pub use type_entry::TypeEntry;

/// Name under which the varargs pseudo-type is registered.
pub const VARARGS_TYPE_NAME: &str = "...";
