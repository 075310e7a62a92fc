//! End-to-end signature parsing through the public facade.

use apiextractor::{normalize_signature, parse, parse_type_use};

#[test]
fn parses_ugly_name_and_spacing() {
    let descriptor = parse(
        "_fu__nc_(  type1, const type2, const Abc<int& , C<char*> * > * *, const type3* const, char)",
        "void",
    )
    .unwrap();

    assert_eq!(descriptor.name, "_fu__nc_");
    assert_eq!(descriptor.arguments.len(), 5);
    assert_eq!(descriptor.return_type.as_ref().unwrap().base_name, "void");

    let a0 = &descriptor.arguments[0].type_use;
    assert_eq!(a0.base_name, "type1");
    assert!(!a0.is_constant);
    assert_eq!(a0.indirections, 0);

    let a1 = &descriptor.arguments[1].type_use;
    assert_eq!(a1.base_name, "type2");
    assert!(a1.is_constant);

    // The template argument list keeps its commas and stars intact.
    let a2 = &descriptor.arguments[2].type_use;
    assert_eq!(a2.base_name, "Abc<int& , C<char*> * >");
    assert!(a2.is_constant);
    assert_eq!(a2.indirections, 2);

    // A `const` after a star binds to the pointer, not the use site, so it
    // stays in the base name.
    let a3 = &descriptor.arguments[3].type_use;
    assert_eq!(a3.base_name, "type3* const");
    assert!(a3.is_constant);
    assert_eq!(a3.indirections, 0);
}

#[test]
fn constructor_signature_has_no_return_type() {
    let descriptor = parse("A(int)", "").unwrap();
    assert_eq!(descriptor.name, "A");
    assert!(descriptor.return_type.is_none());
}

#[test]
fn trailing_const_qualifier() {
    let descriptor = parse("get() const", "int").unwrap();
    assert!(descriptor.is_const_qualified);
    assert!(descriptor.arguments.is_empty());
}

#[test]
fn defaults_survive_parsing_and_drop_out_of_the_key() {
    let descriptor = parse("func(int, float = 4.6, B)", "int").unwrap();

    assert_eq!(descriptor.arguments.len(), 3);
    assert!(descriptor.arguments[0].default_expression.is_none());
    assert_eq!(
        descriptor.arguments[1].default_expression.as_deref(),
        Some("4.6")
    );
    assert_eq!(descriptor.arguments[2].type_use.base_name, "B");

    assert_eq!(descriptor.normalized_signature(), "func(int,float,B)");
}

#[test]
fn varargs_is_the_final_argument() {
    let descriptor = parse("func(int, ...)", "void").unwrap();
    assert_eq!(descriptor.arguments.len(), 2);
    assert!(descriptor.arguments[1].type_use.is_varargs);
    assert!(!descriptor.arguments[0].type_use.is_varargs);
}

#[test]
fn display_round_trips_through_the_parser() {
    let original = parse("func(const Abc<int&, C<char*>*>**, float = 4.6) const", "int").unwrap();
    let reparsed = parse(&original.to_string(), "int").unwrap();
    assert_eq!(original, reparsed);
}

#[test]
fn normalize_signature_is_spacing_insensitive() {
    let a = normalize_signature("func( const Abc<int& , C<char*> * > * * , int )").unwrap();
    let b = normalize_signature("func(const Abc<int&,C<char*>*>**,int)").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "func(constAbc<int&,C<char*>*>**,int)");
}

#[test]
fn malformed_signatures_are_rejected() {
    assert!(parse("func(int", "void").is_err());
    assert!(parse("func)int(", "void").is_err());
    assert!(parse("func(..., int)", "void").is_err());
    assert!(normalize_signature("func(Abc<int)").is_err());
}

#[test]
fn bare_name_is_a_zero_argument_signature() {
    let descriptor = parse("func", "void").unwrap();
    assert_eq!(descriptor.name, "func");
    assert!(descriptor.arguments.is_empty());
    assert_eq!(descriptor.normalized_signature(), "func()");
}

#[test]
fn type_use_parses_standalone() {
    let t = parse_type_use("const char**&").unwrap();
    assert!(t.is_constant);
    assert_eq!(t.base_name, "char");
    assert_eq!(t.indirections, 2);
    assert!(t.is_reference);
    assert_eq!(t.normalized(), "constchar**&");
    assert_eq!(t.to_string(), "const char**&");
}
