//! Type and directive storage for the apiextractor pipeline.
//!
//! Two registries live here:
//!
//! - [`TypeRegistry`] - the process-wide catalog mapping type names to
//!   opaque identities, populated once by the type-system loader and
//!   read-only afterwards.
//! - [`DirectiveStore`] - modification directives keyed by normalized
//!   signature plus added-function descriptors keyed by scope, also
//!   populated once during loading and queried by the merge engine.
//!
//! Population is single-writer and sequential; after it completes both
//! registries support concurrent reads without locking.

pub mod directive_store;
pub mod registry;

pub use directive_store::DirectiveStore;
pub use registry::TypeRegistry;
