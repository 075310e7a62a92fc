//! The signature scanner.
//!
//! Signatures are split with a bracket-depth counter instead of a grammar:
//! `<` and `(` increment, `>` and `)` decrement, and commas, `=` and
//! trailing `*` tokens only count at depth 0. This is what lets an argument
//! like `const Abc<int&, C<char*>*>**` survive intact despite its internal
//! commas and stars.

use apiextractor_core::{ArgumentDescriptor, FunctionDescriptor, SignatureError, TypeUse};

/// Parse a signature string plus a return-type string into a descriptor.
///
/// An empty (or whitespace-only) `return_type` yields no return type, which
/// is how constructor signatures are declared. A signature without
/// parentheses is a bare name with zero arguments.
///
/// Fails with [`SignatureError::MalformedSignature`] when parentheses are
/// unbalanced, a bracket-depth counter goes negative, a default-value `=`
/// dangles, or a `...` appears anywhere but last.
pub fn parse(signature: &str, return_type: &str) -> Result<FunctionDescriptor, SignatureError> {
    let text = signature.trim();
    if text.is_empty() {
        return Err(SignatureError::malformed(signature, "empty signature"));
    }

    let (raw_name, param_block, qualifiers) = split_signature(signature, text)?;

    // Hand-written names carry stray whitespace; collapse it all away.
    let name: String = raw_name.split_whitespace().collect();
    if name.is_empty() {
        return Err(SignatureError::malformed(signature, "missing function name"));
    }

    let mut arguments = Vec::new();
    if let Some(block) = param_block {
        if !block.trim().is_empty() {
            for item in split_top_level(signature, block, ',')? {
                let item = item.trim();
                if item.is_empty() {
                    return Err(SignatureError::malformed(signature, "empty argument"));
                }
                arguments.push(parse_argument(signature, item)?);
            }
        }
    }

    // At most one varargs marker, always last.
    if arguments
        .iter()
        .rev()
        .skip(1)
        .any(|a| a.type_use.is_varargs)
    {
        return Err(SignatureError::malformed(
            signature,
            "'...' must be the last argument",
        ));
    }

    let is_const_qualified = qualifiers.split_whitespace().any(|token| token == "const");

    let return_type = {
        let text = return_type.trim();
        if text.is_empty() {
            None
        } else {
            Some(type_use(return_type, text)?)
        }
    };

    Ok(FunctionDescriptor {
        name,
        arguments,
        return_type,
        is_const_qualified,
    })
}

/// Parse a standalone type-use string (e.g. a return type).
pub fn parse_type_use(text: &str) -> Result<TypeUse, SignatureError> {
    type_use(text, text.trim())
}

/// Parse a signature string into its normalized key form.
///
/// Strips all whitespace and default-value text, keeping only the name and
/// the ordered argument type markers. Both added-function declarations and
/// directives referring to the same logical function go through this one
/// function, which is what keeps their keys consistent.
pub fn normalize_signature(signature: &str) -> Result<String, SignatureError> {
    Ok(parse(signature, "")?.normalized_signature())
}

/// Split into (name, parameter block, trailing qualifiers).
fn split_signature<'a>(
    full: &str,
    text: &'a str,
) -> Result<(&'a str, Option<&'a str>, &'a str), SignatureError> {
    let Some(open) = text.find('(') else {
        // Bare-name signature. A stray ')' would mean the depth counter
        // went negative.
        if text.contains(')') {
            return Err(SignatureError::malformed(full, "unbalanced parentheses"));
        }
        return Ok((text, None, ""));
    };

    let mut depth = 0i32;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + i;
                    return Ok((
                        &text[..open],
                        Some(&text[open + 1..close]),
                        &text[close + 1..],
                    ));
                }
            }
            _ => {}
        }
    }
    Err(SignatureError::malformed(full, "unbalanced parentheses"))
}

/// Split `s` on `sep`, honoring bracket depth: `<` and `(` open, `>` and
/// `)` close, and only depth-0 separators split.
fn split_top_level<'a>(
    full: &str,
    s: &'a str,
    sep: char,
) -> Result<Vec<&'a str>, SignatureError> {
    let mut items = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(SignatureError::malformed(full, "bracket depth went negative"));
                }
            }
            c if c == sep && depth == 0 => {
                items.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(SignatureError::malformed(full, "unbalanced angle brackets"));
    }
    items.push(&s[start..]);
    Ok(items)
}

/// Parse one comma-separated parameter item.
fn parse_argument(full: &str, item: &str) -> Result<ArgumentDescriptor, SignatureError> {
    let (type_text, default_expression) = split_default(full, item)?;
    Ok(ArgumentDescriptor {
        type_use: type_use(full, type_text)?,
        default_expression,
    })
}

/// Split an item on a top-level `=` into type text and default expression.
fn split_default<'a>(
    full: &str,
    item: &'a str,
) -> Result<(&'a str, Option<String>), SignatureError> {
    let mut depth = 0i32;
    for (i, c) in item.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth -= 1,
            '=' if depth == 0 => {
                let type_text = item[..i].trim();
                let expression = item[i + 1..].trim();
                if type_text.is_empty() || expression.is_empty() {
                    return Err(SignatureError::malformed(full, "dangling '='"));
                }
                return Ok((type_text, Some(expression.to_string())));
            }
            _ => {}
        }
    }
    Ok((item, None))
}

/// Parse a TypeUse from trimmed type text.
///
/// Strips a leading `const`, then a trailing `&`, then trailing `*` tokens
/// one at a time while they sit at depth 0; whatever remains (trimmed) is
/// the base name, template parameter list kept verbatim.
fn type_use(full: &str, text: &str) -> Result<TypeUse, SignatureError> {
    let mut s = text;

    if s == "..." {
        return Ok(TypeUse::varargs());
    }
    if s.contains("...") {
        return Err(SignatureError::malformed(full, "misplaced '...'"));
    }

    let mut is_constant = false;
    if let Some(rest) = s.strip_prefix("const") {
        // Only a whole `const` token counts; `constness` is a type name.
        if rest.starts_with(char::is_whitespace) {
            is_constant = true;
            s = rest.trim_start();
        }
    }

    let mut s = s.trim_end();
    let mut is_reference = false;
    if ends_with_top_level(s, '&') {
        is_reference = true;
        s = s[..s.len() - 1].trim_end();
    }

    let mut indirections = 0;
    while ends_with_top_level(s, '*') {
        indirections += 1;
        s = s[..s.len() - 1].trim_end();
    }

    let base_name = s.trim();
    if base_name.is_empty() {
        return Err(SignatureError::malformed(full, "missing type name"));
    }

    Ok(TypeUse {
        base_name: base_name.to_string(),
        indirections,
        is_reference,
        is_constant,
        is_varargs: false,
    })
}

/// Whether `s` ends with `marker` at bracket depth 0.
///
/// `Abc<int&, C<char*>*>**` ends with a depth-0 `*`, but the star inside
/// `C<char*>` never will; that is why it reports 2 indirections, not 3.
fn ends_with_top_level(s: &str, marker: char) -> bool {
    debug_assert!(marker.is_ascii());
    if !s.ends_with(marker) {
        return false;
    }
    let mut depth = 0i32;
    for c in s[..s.len() - 1].chars() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth -= 1,
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_constness() {
        let f = parse("func(type1, const type2, const type3* const)", "void").unwrap();
        assert_eq!(f.name, "func");
        assert_eq!(f.arguments.len(), 3);
        assert!(!f.is_const_qualified);

        let ret = f.return_type.unwrap();
        assert_eq!(ret.base_name, "void");
        assert_eq!(ret.indirections, 0);
        assert!(!ret.is_constant);
        assert!(!ret.is_reference);
    }

    #[test]
    fn ugly_template_argument() {
        let sig = "    _fu__nc_       (  type1, const type2, const Abc<int& , C<char*> *   >  * *, const type3* const    )   const ";
        let f = parse(sig, "const Abc<int& , C<char*> *   >  * *").unwrap();
        assert_eq!(f.name, "_fu__nc_");
        assert_eq!(f.arguments.len(), 4);
        assert!(f.is_const_qualified);

        let ret = f.return_type.as_ref().unwrap();
        assert_eq!(ret.base_name, "Abc<int& , C<char*> *   >");
        assert_eq!(ret.indirections, 2);
        assert!(ret.is_constant);
        assert!(!ret.is_reference);

        // Argument 3 is written identically to the return type.
        assert_eq!(&f.arguments[2].type_use, ret);
    }

    #[test]
    fn empty_parameter_block() {
        let f = parse("func()", "void").unwrap();
        assert_eq!(f.name, "func");
        assert!(f.arguments.is_empty());
    }

    #[test]
    fn bare_name_without_parentheses() {
        let f = parse("func", "void").unwrap();
        assert_eq!(f.name, "func");
        assert!(f.arguments.is_empty());
        assert!(!f.is_const_qualified);
    }

    #[test]
    fn varargs_is_one_argument() {
        let f = parse("func(int,char,...)", "void").unwrap();
        assert_eq!(f.arguments.len(), 3);
        let last = &f.arguments[2].type_use;
        assert!(last.is_varargs);
        assert!(last.base_name.is_empty());
        assert!(!f.is_const_qualified);
    }

    #[test]
    fn varargs_and_trailing_const_are_orthogonal() {
        let f = parse("func(int,...) const", "void").unwrap();
        assert!(f.is_const_qualified);
        assert!(f.arguments[1].type_use.is_varargs);
    }

    #[test]
    fn varargs_not_last_is_malformed() {
        assert!(parse("func(..., int)", "void").is_err());
    }

    #[test]
    fn default_value_split_at_top_level_equals() {
        let f = parse("b(int, float = 4.6, const B&)", "int").unwrap();
        assert_eq!(f.arguments.len(), 3);
        assert_eq!(f.arguments[1].default_expression.as_deref(), Some("4.6"));
        assert_eq!(f.arguments[1].type_use.base_name, "float");
        assert!(f.arguments[0].default_expression.is_none());

        let third = &f.arguments[2].type_use;
        assert_eq!(third.base_name, "B");
        assert!(third.is_constant);
        assert!(third.is_reference);
    }

    #[test]
    fn no_return_type_means_constructor_signature() {
        let f = parse("A(int)", "").unwrap();
        assert_eq!(f.name, "A");
        assert!(f.return_type.is_none());
        assert_eq!(f.arguments.len(), 1);
    }

    #[test]
    fn reference_to_pointer() {
        let t = parse_type_use("int*&").unwrap();
        assert_eq!(t.base_name, "int");
        assert_eq!(t.indirections, 1);
        assert!(t.is_reference);
    }

    #[test]
    fn pointer_const_suffix_stays_in_base_name() {
        // Only leading const, trailing & and trailing * belong to the
        // position; a pointer-const suffix is left in the base text.
        let t = parse_type_use("const type3* const").unwrap();
        assert!(t.is_constant);
        assert_eq!(t.indirections, 0);
        assert_eq!(t.base_name, "type3* const");
    }

    #[test]
    fn const_prefix_requires_whole_token() {
        let t = parse_type_use("constness").unwrap();
        assert!(!t.is_constant);
        assert_eq!(t.base_name, "constness");
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        assert!(parse("func(int", "void").is_err());
        assert!(parse("func(a<b)", "void").is_err());
        assert!(parse("func(a>b)", "void").is_err());
        assert!(parse("func)", "void").is_err());
        assert!(parse("func(int, = 3)", "void").is_err());
        assert!(parse("func(int =)", "void").is_err());
        assert!(parse("func(int,,char)", "void").is_err());
        assert!(parse("", "void").is_err());
    }

    #[test]
    fn parse_is_idempotent_via_display() {
        let cases = [
            ("func(type1, const type2, const type3* const)", "void"),
            ("func(int,char,...)", "void"),
            ("b(int, float = 4.6, const B&)", "int"),
            (
                "_fu__nc_(type1, const Abc<int& , C<char*> *   >  * *) const",
                "const Abc<int& , C<char*> *   >  * *",
            ),
        ];
        for (sig, ret) in cases {
            let first = parse(sig, ret).unwrap();
            let reserialized = first.to_string();
            let second = parse(&reserialized, ret).unwrap();
            assert_eq!(first, second, "round-trip changed '{sig}'");
        }
    }

    #[test]
    fn normalize_signature_strips_whitespace_and_defaults() {
        assert_eq!(
            normalize_signature("func( int , float = 4.6 )").unwrap(),
            "func(int,float)"
        );
        assert_eq!(normalize_signature("func").unwrap(), "func()");
        assert_eq!(
            normalize_signature("f(const Abc<int& , C<char*> * > * )").unwrap(),
            "f(constAbc<int&,C<char*>*>*)"
        );
    }

    #[test]
    fn split_top_level_respects_depth() {
        let items = split_top_level("t", "a, B<c, d>, e(f, g)", ',').unwrap();
        assert_eq!(items, vec!["a", " B<c, d>", " e(f, g)"]);
    }
}
