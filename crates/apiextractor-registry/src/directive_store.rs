//! DirectiveStore - directives and added functions by scope.
//!
//! Directives are indexed by `(scope, normalized signature key)`; added
//! functions by scope, in registration order. Correctness of the keying
//! depends entirely on the signature parser producing consistent types for
//! both the added-function declaration and any directive referring to the
//! same logical function, so every textual key goes through
//! [`apiextractor_parser::normalize_signature`].

use rustc_hash::FxHashMap;

use apiextractor_core::{
    AddedFunction, AddedFunctionAttributes, Directive, FunctionDescriptor, Scope, SignatureError,
};
use apiextractor_parser::normalize_signature;

/// Registry of modification directives and added-function descriptors.
#[derive(Debug, Default)]
pub struct DirectiveStore {
    /// Directives per scope, per normalized key, in registration order.
    directives: FxHashMap<Scope, FxHashMap<String, Vec<Directive>>>,
    /// Added functions per scope, in registration order.
    added: FxHashMap<Scope, Vec<AddedFunction>>,
}

impl DirectiveStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Population (single-writer, during type-system loading) ===

    /// Register a directive under an already-normalized key.
    pub fn register_directive(
        &mut self,
        scope: Scope,
        key: impl Into<String>,
        directive: Directive,
    ) {
        self.directives
            .entry(scope)
            .or_default()
            .entry(key.into())
            .or_default()
            .push(directive);
    }

    /// Register a directive keyed by raw signature text.
    ///
    /// The text is parsed and normalized; malformed text is rejected here,
    /// at load time, rather than surfacing during merge.
    pub fn register_directive_for_signature(
        &mut self,
        scope: Scope,
        signature: &str,
        directive: Directive,
    ) -> Result<(), SignatureError> {
        let key = normalize_signature(signature)?;
        self.register_directive(scope, key, directive);
        Ok(())
    }

    /// Register an added function in a scope.
    pub fn register_added_function(
        &mut self,
        scope: Scope,
        descriptor: FunctionDescriptor,
        attributes: AddedFunctionAttributes,
    ) {
        self.added
            .entry(scope)
            .or_default()
            .push(AddedFunction::new(descriptor, attributes));
    }

    // === Queries (read-only, during merge) ===

    /// Directives registered for a key in a scope, in registration order.
    pub fn directives(&self, scope: &Scope, key: &str) -> &[Directive] {
        self.directives
            .get(scope)
            .and_then(|by_key| by_key.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every `(key, directives)` pair registered for a scope, unordered by
    /// key; directives within a key keep registration order.
    pub fn directives_in_scope(
        &self,
        scope: &Scope,
    ) -> impl Iterator<Item = (&str, &[Directive])> {
        self.directives
            .get(scope)
            .into_iter()
            .flat_map(|by_key| by_key.iter().map(|(k, v)| (k.as_str(), v.as_slice())))
    }

    /// Added functions registered for a scope, in registration order.
    pub fn added_functions(&self, scope: &Scope) -> &[AddedFunction] {
        self.added
            .get(scope)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Module-level added functions with a bare name. Used to look up free
    /// functions.
    pub fn added_functions_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a AddedFunction> {
        self.added_functions(&Scope::Module)
            .iter()
            .filter(move |f| f.name() == name)
    }

    /// Total number of registered directives across all scopes and keys.
    pub fn directive_count(&self) -> usize {
        self.directives
            .values()
            .flat_map(|by_key| by_key.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.added.is_empty()
    }
}
