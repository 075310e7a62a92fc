//! The parsed-source skeleton consumed by the merger.
//!
//! The skeleton is supplied fully formed by the source-parsing collaborator:
//! scopes in order, each with its already-resolved functions (name, kind,
//! visibility, resolved argument and return types). This core never
//! re-parses it.

use apiextractor_core::{
    FunctionKind, FunctionTraits, MetaArgument, MetaFunction, MetaType, ScopeId, Visibility,
};

/// A source-discovered function with fully resolved types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFunction {
    pub name: String,
    pub kind: FunctionKind,
    pub visibility: Visibility,
    pub traits: FunctionTraits,
    pub arguments: Vec<MetaArgument>,
    pub return_type: Option<MetaType>,
    pub is_const_qualified: bool,
}

impl DiscoveredFunction {
    /// Create a discovered function with no arguments.
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::default(),
            traits: FunctionTraits::default(),
            arguments: Vec::new(),
            return_type: None,
            is_const_qualified: false,
        }
    }

    /// Append an argument.
    pub fn with_argument(mut self, argument: MetaArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Set the return type.
    pub fn with_return_type(mut self, return_type: MetaType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the traits.
    pub fn with_traits(mut self, traits: FunctionTraits) -> Self {
        self.traits = traits;
        self
    }

    /// Copy into a graph node, verbatim, wiring the back-references to the
    /// given owner scope.
    pub fn to_meta_function(&self, owner: Option<ScopeId>) -> MetaFunction {
        let mut function = MetaFunction::new(self.name.clone(), self.kind);
        function.visibility = self.visibility;
        function.traits = self.traits;
        function.arguments = self.arguments.clone();
        function.return_type = self.return_type.clone();
        function.is_const_qualified = self.is_const_qualified;
        function.owner_class = owner;
        function.implementing_class = owner;
        function.declaring_class = owner;
        function
    }
}

/// One class scope of the skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassSkeleton {
    pub name: String,
    /// Discovered functions, in source order.
    pub functions: Vec<DiscoveredFunction>,
}

impl ClassSkeleton {
    /// Create an empty class skeleton.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Append a discovered function.
    pub fn with_function(mut self, function: DiscoveredFunction) -> Self {
        self.functions.push(function);
        self
    }
}

/// The full parsed-source skeleton: module functions plus class scopes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skeleton {
    pub module_functions: Vec<DiscoveredFunction>,
    pub classes: Vec<ClassSkeleton>,
}

impl Skeleton {
    /// Create an empty skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class scope.
    pub fn with_class(mut self, class: ClassSkeleton) -> Self {
        self.classes.push(class);
        self
    }

    /// Append a module-level function.
    pub fn with_module_function(mut self, function: DiscoveredFunction) -> Self {
        self.module_functions.push(function);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_meta_function_preserves_everything() {
        let discovered = DiscoveredFunction::new("a", FunctionKind::Normal)
            .with_visibility(Visibility::Protected);
        let function = discovered.to_meta_function(None);

        assert_eq!(function.name, "a");
        assert_eq!(function.visibility, Visibility::Protected);
        assert!(!function.is_user_added());
        assert_eq!(function.owner_class, None);
        assert_eq!(function.implementing_class, None);
        assert_eq!(function.declaring_class, None);
    }

    #[test]
    fn skeleton_builders() {
        let skeleton = Skeleton::new()
            .with_class(
                ClassSkeleton::new("A")
                    .with_function(DiscoveredFunction::new("a", FunctionKind::Normal)),
            )
            .with_module_function(DiscoveredFunction::new("free", FunctionKind::Normal));

        assert_eq!(skeleton.classes.len(), 1);
        assert_eq!(skeleton.classes[0].functions.len(), 1);
        assert_eq!(skeleton.module_functions.len(), 1);
    }
}
