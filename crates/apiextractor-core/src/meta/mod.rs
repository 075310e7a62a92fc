//! The resolved metadata graph.
//!
//! Nodes are created during merge and are read-only afterwards; later
//! pipeline stages (code generators) only traverse them. Back-references
//! between functions and classes are [`ScopeId`] indices into the graph's
//! class arena, never owning pointers.

mod argument;
mod class;
mod function;
mod graph;

pub use argument::{MetaArgument, MetaType};
pub use class::MetaClass;
pub use function::{FunctionKind, FunctionTraits, MetaFunction};
pub use graph::{MetaGraph, ScopeId};
