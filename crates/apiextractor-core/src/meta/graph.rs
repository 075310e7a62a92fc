//! The metadata graph and its scope arena.

use super::{MetaClass, MetaFunction};

/// Index of a class scope in the graph's arena.
///
/// Back-references in [`MetaFunction`] hold `Option<ScopeId>`; `None`
/// denotes the module scope. Using indices instead of references keeps the
/// graph free of lifetime cycles while the external inheritance pass
/// re-points `implementing_class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The arena index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The resolved metadata graph: a class arena plus module-level functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaGraph {
    classes: Vec<MetaClass>,
    module_functions: Vec<MetaFunction>,
}

impl MetaGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class scope, returning its arena id.
    pub fn add_class(&mut self, class: MetaClass) -> ScopeId {
        let id = ScopeId(self.classes.len() as u32);
        self.classes.push(class);
        id
    }

    /// The class at an arena id.
    pub fn class(&self, id: ScopeId) -> &MetaClass {
        &self.classes[id.index()]
    }

    /// Mutable access to a class scope. Used by the merge phase; the graph
    /// is treated as read-only once merge finishes.
    pub fn class_mut(&mut self, id: ScopeId) -> &mut MetaClass {
        &mut self.classes[id.index()]
    }

    /// Find a class by name.
    pub fn find_class(&self, name: &str) -> Option<&MetaClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Find a class's arena id by name.
    pub fn find_class_id(&self, name: &str) -> Option<ScopeId> {
        self.classes
            .iter()
            .position(|c| c.name == name)
            .map(|i| ScopeId(i as u32))
    }

    /// All classes, in merge order.
    pub fn classes(&self) -> &[MetaClass] {
        &self.classes
    }

    /// Module-level functions, in discovery-then-addition order.
    pub fn module_functions(&self) -> &[MetaFunction] {
        &self.module_functions
    }

    /// Mutable module-level function list. Merge phase only.
    pub fn module_functions_mut(&mut self) -> &mut Vec<MetaFunction> {
        &mut self.module_functions
    }

    /// Find the first module-level function with the given name.
    pub fn find_module_function(&self, name: &str) -> Option<&MetaFunction> {
        self.module_functions.iter().find(|f| f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.module_functions.is_empty()
    }
}
