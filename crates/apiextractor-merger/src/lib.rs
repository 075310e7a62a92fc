//! Metadata merge engine.
//!
//! [`MetadataMerger`] consumes the parsed-source [`Skeleton`], the
//! [`DirectiveStore`](apiextractor_registry::DirectiveStore) and the
//! [`TypeRegistry`](apiextractor_registry::TypeRegistry), and produces the
//! resolved [`MetaGraph`](apiextractor_core::MetaGraph): added functions
//! instantiated, every textual type reference resolved to a registry
//! identity, every matching directive applied.
//!
//! Scopes are merged independently; a failure in one scope is recorded in
//! the [`MergeReport`] and leaves that scope with its discovered functions
//! untouched, while unrelated scopes still merge.

pub mod merger;
pub mod report;
pub mod skeleton;

pub use merger::MetadataMerger;
pub use report::{MergeReport, ScopeFailure};
pub use skeleton::{ClassSkeleton, DiscoveredFunction, Skeleton};
