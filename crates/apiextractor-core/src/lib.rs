//! Core data model for the apiextractor pipeline.
//!
//! This crate defines the shared vocabulary of the binding-metadata core:
//!
//! - [`TypeHash`] / [`TypeRef`] - deterministic type identities
//! - [`TypeEntry`] and friends - type catalog entries
//! - [`TypeUse`] / [`FunctionDescriptor`] - parsed signature structures
//! - [`Directive`] / [`CodeSnip`] - type-system modification directives
//! - [`MetaGraph`] / [`MetaClass`] / [`MetaFunction`] - the resolved graph
//! - the error hierarchy rooted at [`ExtractorError`]
//!
//! Parsing lives in `apiextractor-parser`, storage in
//! `apiextractor-registry`, and the merge engine in `apiextractor-merger`.

pub mod directive;
pub mod entries;
pub mod error;
pub mod function;
pub mod meta;
pub mod scope;
pub mod type_hash;
pub mod type_use;
pub mod visibility;

pub use directive::{CodeSnip, Directive, SnipPosition, TargetLanguage};
pub use entries::{
    ContainerEntry, EnumEntry, ObjectEntry, PrimitiveEntry, TypeEntry, VARARGS_TYPE_NAME,
    ValueEntry,
};
pub use error::{ExtractorError, MergeError, RegistryError, SignatureError, TypePosition};
pub use function::{
    AddedFunction, AddedFunctionAttributes, ArgumentDescriptor, FunctionDescriptor,
};
pub use meta::{
    FunctionKind, FunctionTraits, MetaArgument, MetaClass, MetaFunction, MetaGraph, MetaType,
    ScopeId,
};
pub use scope::Scope;
pub use type_hash::{TypeHash, TypeRef};
pub use type_use::TypeUse;
pub use visibility::Visibility;
