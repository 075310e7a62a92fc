//! Resolved class nodes.

use crate::TypeRef;

use super::MetaFunction;

/// A resolved class owning its functions.
///
/// Functions are kept in discovery-then-addition order: source-discovered
/// functions first, user-added functions appended after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaClass {
    /// Class name, unique within its enclosing scope.
    pub name: String,
    /// Registry identity of the class type, when registered.
    pub type_ref: Option<TypeRef>,
    /// Owned functions, in discovery-then-addition order.
    pub functions: Vec<MetaFunction>,
}

impl MetaClass {
    /// Create an empty class node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: None,
            functions: Vec::new(),
        }
    }

    /// Find the first function with the given name.
    pub fn find_function(&self, name: &str) -> Option<&MetaFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// All functions with the given name (overload sets).
    pub fn functions_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MetaFunction> {
        self.functions.iter().filter(move |f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::FunctionKind;

    #[test]
    fn find_function_by_name() {
        let mut class = MetaClass::new("A");
        class.functions.push(MetaFunction::new("a", FunctionKind::Normal));
        class.functions.push(MetaFunction::new("b", FunctionKind::Normal));

        assert!(class.find_function("a").is_some());
        assert!(class.find_function("missing").is_none());
        assert_eq!(class.functions_named("b").count(), 1);
    }
}
