//! Per-scope merge outcomes.
//!
//! The merger never swallows a failure and never aborts the whole run for
//! one bad scope: every scope's outcome lands here, so callers can see
//! exactly which scopes merged and which failed, and why.

use apiextractor_core::{MergeError, Scope};

/// One failed scope and its error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFailure {
    pub scope: Scope,
    pub error: MergeError,
}

/// Accumulated outcomes of one merge run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    merged: Vec<Scope>,
    failures: Vec<ScopeFailure>,
}

impl MergeReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_success(&mut self, scope: Scope) {
        self.merged.push(scope);
    }

    pub(crate) fn record_failure(&mut self, scope: Scope, error: MergeError) {
        self.failures.push(ScopeFailure { scope, error });
    }

    /// Whether every scope merged cleanly.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Scopes that merged cleanly, in merge order.
    pub fn merged_scopes(&self) -> &[Scope] {
        &self.merged
    }

    /// Failed scopes with their errors, in merge order.
    pub fn failures(&self) -> &[ScopeFailure] {
        &self.failures
    }

    /// The error for a given scope, if it failed.
    pub fn failure_for(&self, scope: &Scope) -> Option<&MergeError> {
        self.failures
            .iter()
            .find(|f| &f.scope == scope)
            .map(|f| &f.error)
    }
}
