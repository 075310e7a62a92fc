//! apiextractor - the semantic core of a binding-generation front end.
//!
//! This crate ties the pipeline together: the signature parser turns
//! hand-written signature strings into structured descriptors, the
//! registries hold type identities and modification directives, and the
//! merger produces the resolved metadata graph consumed by code
//! generators.
//!
//! # Example
//!
//! ```
//! use apiextractor::{
//!     AddedFunctionAttributes, ClassSkeleton, DirectiveStore, PrimitiveEntry, Scope, Skeleton,
//!     TypeRegistry, merge, parse,
//! };
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(PrimitiveEntry::new("int")).unwrap();
//!
//! let mut store = DirectiveStore::new();
//! let descriptor = parse("func(int)", "int").unwrap();
//! store.register_added_function(
//!     Scope::class("A"),
//!     descriptor,
//!     AddedFunctionAttributes::default(),
//! );
//!
//! let skeleton = Skeleton::new().with_class(ClassSkeleton::new("A"));
//! let (graph, report) = merge(&skeleton, &store, &registry);
//!
//! assert!(report.is_success());
//! assert!(graph.find_class("A").unwrap().find_function("func").is_some());
//! ```

pub use apiextractor_core::{
    AddedFunction, AddedFunctionAttributes, ArgumentDescriptor, CodeSnip, ContainerEntry,
    Directive, EnumEntry, ExtractorError, FunctionDescriptor, FunctionKind, FunctionTraits,
    MergeError, MetaArgument, MetaClass, MetaFunction, MetaGraph, MetaType, ObjectEntry,
    PrimitiveEntry, RegistryError, Scope, ScopeId, SignatureError, SnipPosition, TargetLanguage,
    TypeEntry, TypeHash, TypePosition, TypeRef, TypeUse, VARARGS_TYPE_NAME, ValueEntry,
    Visibility,
};
pub use apiextractor_merger::{
    ClassSkeleton, DiscoveredFunction, MergeReport, MetadataMerger, ScopeFailure, Skeleton,
};
pub use apiextractor_parser::{normalize_signature, parse, parse_type_use};
pub use apiextractor_registry::{DirectiveStore, TypeRegistry};

/// Merge a skeleton against a populated store and registry in one call.
pub fn merge(
    skeleton: &Skeleton,
    store: &DirectiveStore,
    registry: &TypeRegistry,
) -> (MetaGraph, MergeReport) {
    MetadataMerger::new(store, registry).merge(skeleton)
}
