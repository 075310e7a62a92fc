//! Modification directives and injected code snippets.
//!
//! A [`Directive`] is a modification instruction from the type-system
//! description, targeting one function by normalized signature key. The set
//! of directive kinds is a closed tagged variant: the merger applies them by
//! exhaustive match, so adding a kind forces a compile-checked update of the
//! merge logic.

use bitflags::bitflags;

use crate::Visibility;

bitflags! {
    /// Which generated-code audience an injected snippet targets.
    ///
    /// Stored as a mask so snippet queries can intersect: a lookup for
    /// `TARGET_LANG` matches any snippet whose language mask contains that
    /// bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TargetLanguage: u32 {
        /// Target-language wrapper code.
        const TARGET_LANG = 0b0001;
        /// Native (source-language) glue code.
        const NATIVE = 0b0010;
        /// Shell/override dispatch code.
        const SHELL = 0b0100;
        /// Any audience.
        const ALL = 0b0111;
    }
}

/// Where an injected snippet goes relative to the generated function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnipPosition {
    /// Before the generated body.
    Beginning,
    /// After the generated body.
    End,
    /// No constraint; matches every position query.
    #[default]
    Any,
}

/// One injected code snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnip {
    /// Audience mask for this snippet.
    pub language: TargetLanguage,
    /// Position relative to the generated body.
    pub position: SnipPosition,
    /// Snippet text, verbatim.
    pub code: String,
}

impl CodeSnip {
    /// Create a snippet.
    pub fn new(language: TargetLanguage, position: SnipPosition, code: impl Into<String>) -> Self {
        Self {
            language,
            position,
            code: code.into(),
        }
    }

    /// Whether this snippet matches a position/language query.
    ///
    /// `Any` on either side matches every position; languages match when
    /// the masks intersect.
    pub fn matches(&self, position: SnipPosition, language: TargetLanguage) -> bool {
        let position_ok = position == SnipPosition::Any
            || self.position == SnipPosition::Any
            || self.position == position;
        position_ok && self.language.intersects(language)
    }
}

/// A modification directive keyed by normalized signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Append a code snippet to the function's injected-code sequence.
    CodeInjection(CodeSnip),
    /// Replace the default expression of the argument at a 1-based index.
    ReplaceDefaultExpression {
        /// 1-based argument index.
        index: usize,
        /// Replacement expression text.
        expression: String,
    },
    /// Override the function's visibility.
    AccessOverride(Visibility),
    /// Override the function's static flag.
    StaticOverride(bool),
}

impl Directive {
    /// Short kind name, used in failure messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Directive::CodeInjection(_) => "inject-code",
            Directive::ReplaceDefaultExpression { .. } => "replace-default-expression",
            Directive::AccessOverride(_) => "access-override",
            Directive::StaticOverride(_) => "static-override",
        }
    }

    /// Whether this directive injects code.
    pub const fn is_code_injection(&self) -> bool {
        matches!(self, Directive::CodeInjection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snip_matches_same_position_and_language() {
        let snip = CodeSnip::new(TargetLanguage::TARGET_LANG, SnipPosition::End, "code();");
        assert!(snip.matches(SnipPosition::End, TargetLanguage::TARGET_LANG));
        assert!(!snip.matches(SnipPosition::Beginning, TargetLanguage::TARGET_LANG));
        assert!(!snip.matches(SnipPosition::End, TargetLanguage::NATIVE));
    }

    #[test]
    fn any_position_matches_everything() {
        let snip = CodeSnip::new(TargetLanguage::TARGET_LANG, SnipPosition::End, "x");
        assert!(snip.matches(SnipPosition::Any, TargetLanguage::TARGET_LANG));

        let any = CodeSnip::new(TargetLanguage::TARGET_LANG, SnipPosition::Any, "y");
        assert!(any.matches(SnipPosition::Beginning, TargetLanguage::TARGET_LANG));
    }

    #[test]
    fn language_mask_intersects() {
        let snip = CodeSnip::new(TargetLanguage::ALL, SnipPosition::Any, "z");
        assert!(snip.matches(SnipPosition::Any, TargetLanguage::NATIVE));
        assert!(snip.matches(SnipPosition::Any, TargetLanguage::SHELL));
    }

    #[test]
    fn kind_names() {
        assert_eq!(
            Directive::StaticOverride(true).kind_name(),
            "static-override"
        );
        assert!(
            Directive::CodeInjection(CodeSnip::new(
                TargetLanguage::TARGET_LANG,
                SnipPosition::Any,
                ""
            ))
            .is_code_injection()
        );
    }
}
