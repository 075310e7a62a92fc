//! Resolved function nodes.

use crate::{CodeSnip, SnipPosition, TargetLanguage, Visibility};

use super::{MetaArgument, MetaType, ScopeId};

/// What kind of function a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionKind {
    /// Ordinary member or free function.
    #[default]
    Normal,
    /// Constructor: name equals the owning class name and there is no
    /// return type.
    Constructor,
    /// Destructor.
    Destructor,
    /// Operator overload.
    Operator,
}

/// Boolean traits of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionTraits {
    pub is_static: bool,
    pub is_virtual: bool,
    pub is_signal: bool,
    pub is_slot: bool,
    /// True exactly for functions instantiated from an added-function
    /// descriptor, never for source-discovered ones.
    pub is_user_added: bool,
}

/// A resolved function in the metadata graph.
///
/// Exclusively owned by the class (or module) that declares it. The
/// `owner_class` / `implementing_class` / `declaring_class` fields are
/// non-owning [`ScopeId`] back-references; `None` means the module scope.
/// `implementing_class` may be re-pointed once by an external
/// inheritance-resolution pass for inherited-but-redeclared functions, via
/// [`MetaFunction::set_implementing_class`]; everything else is immutable
/// after merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaFunction {
    /// Function name.
    pub name: String,
    /// Function kind.
    pub kind: FunctionKind,
    /// Visibility in the owning scope.
    pub visibility: Visibility,
    /// Ordered, resolved arguments.
    pub arguments: Vec<MetaArgument>,
    /// Resolved return type; `None` for constructors and destructors.
    pub return_type: Option<MetaType>,
    /// Scope that owns this function.
    pub owner_class: Option<ScopeId>,
    /// Scope whose generated code implements this function.
    pub implementing_class: Option<ScopeId>,
    /// Scope that declares this function.
    pub declaring_class: Option<ScopeId>,
    /// Boolean traits.
    pub traits: FunctionTraits,
    /// The trailing `const` qualifier from the signature.
    pub is_const_qualified: bool,
    /// Injected code snippets, in insertion order.
    pub injected_code: Vec<CodeSnip>,
}

impl MetaFunction {
    /// Create a function node with no arguments and default traits.
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::default(),
            arguments: Vec::new(),
            return_type: None,
            owner_class: None,
            implementing_class: None,
            declaring_class: None,
            traits: FunctionTraits::default(),
            is_const_qualified: false,
            injected_code: Vec::new(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == FunctionKind::Constructor
    }

    pub fn is_user_added(&self) -> bool {
        self.traits.is_user_added
    }

    pub fn is_static(&self) -> bool {
        self.traits.is_static
    }

    /// Whether any code has been injected into this function.
    pub fn has_injected_code(&self) -> bool {
        !self.injected_code.is_empty()
    }

    /// Injected snippets matching a position/language query, in insertion
    /// order.
    pub fn injected_code_snips(
        &self,
        position: SnipPosition,
        language: TargetLanguage,
    ) -> Vec<&CodeSnip> {
        self.injected_code
            .iter()
            .filter(|snip| snip.matches(position, language))
            .collect()
    }

    /// The normalized signature key this function answers to.
    pub fn normalized_signature(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 16);
        out.push_str(&self.name);
        out.push('(');
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&arg.meta_type.normalized());
        }
        out.push(')');
        out
    }

    /// Re-point the implementing class. Intended for the external
    /// inheritance-resolution pass only; the merger always sets it equal to
    /// `owner_class`.
    pub fn set_implementing_class(&mut self, scope: Option<ScopeId>) {
        self.implementing_class = scope;
    }
}
