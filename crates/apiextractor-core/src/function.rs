//! Parsed function descriptors and added-function records.
//!
//! [`FunctionDescriptor`] is the structured output of the signature parser:
//! a name, ordered arguments, an optional return type, and a const
//! qualifier. [`AddedFunction`] pairs a descriptor with the registration
//! attributes (visibility, static flag) from the type-system description.

use std::fmt;

use crate::{TypeUse, Visibility};

/// One argument position in a parsed signature.
///
/// Position is fixed at parse time and significant: directives address
/// arguments by 1-based index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentDescriptor {
    /// How the type is used at this position.
    pub type_use: TypeUse,
    /// Default-value expression, verbatim text after a top-level `=`.
    pub default_expression: Option<String>,
}

impl ArgumentDescriptor {
    /// Create an argument with no default expression.
    pub fn new(type_use: TypeUse) -> Self {
        Self {
            type_use,
            default_expression: None,
        }
    }

    /// Create an argument with a default expression.
    pub fn with_default(type_use: TypeUse, expression: impl Into<String>) -> Self {
        Self {
            type_use,
            default_expression: Some(expression.into()),
        }
    }
}

impl fmt::Display for ArgumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_use)?;
        if let Some(expr) = &self.default_expression {
            write!(f, " = {expr}")?;
        }
        Ok(())
    }
}

/// Structured form of a hand-written function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Function name with all whitespace collapsed away.
    pub name: String,
    /// Ordered argument descriptors.
    pub arguments: Vec<ArgumentDescriptor>,
    /// Return type; `None` when no return-type text was supplied
    /// (constructors).
    pub return_type: Option<TypeUse>,
    /// The trailing `const` qualifier after the parameter list.
    pub is_const_qualified: bool,
}

impl FunctionDescriptor {
    /// The normalized signature key for this descriptor.
    ///
    /// Name plus ordered argument types in their
    /// [`TypeUse::normalized`] form, comma-joined inside parentheses. No
    /// whitespace, no default expressions, no const qualifier. This is the
    /// single equivalence used to address functions from directives.
    pub fn normalized_signature(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 16);
        out.push_str(&self.name);
        out.push('(');
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&arg.type_use.normalized());
        }
        out.push(')');
        out
    }
}

impl fmt::Display for FunctionDescriptor {
    /// Re-serialize to signature syntax, parseable back to the same
    /// descriptor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")?;
        if self.is_const_qualified {
            write!(f, " const")?;
        }
        Ok(())
    }
}

/// Registration attributes of an added function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddedFunctionAttributes {
    /// Visibility in the owning scope; defaults to public.
    pub visibility: Visibility,
    /// Declared `static` in the type-system description.
    pub is_static: bool,
}

impl AddedFunctionAttributes {
    /// Attributes with an explicit visibility.
    pub fn with_visibility(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: false,
        }
    }

    /// Attributes for a static function.
    pub fn static_function() -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: true,
        }
    }
}

/// A function declared only in the type-system description.
///
/// Added functions are absent from real source; the merger instantiates
/// them into the metadata graph as if they were native, marked
/// `is_user_added`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedFunction {
    /// Parsed signature.
    pub descriptor: FunctionDescriptor,
    /// Registration attributes.
    pub attributes: AddedFunctionAttributes,
}

impl AddedFunction {
    /// Pair a parsed descriptor with its registration attributes.
    pub fn new(descriptor: FunctionDescriptor, attributes: AddedFunctionAttributes) -> Self {
        Self {
            descriptor,
            attributes,
        }
    }

    /// The function name.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}
