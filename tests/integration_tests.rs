//! Integration tests for the full source-to-AST pipeline.
//!
//! These tests exercise the public surface the way a driver would: hand a
//! source string to `parse` and inspect the resulting tree or the single
//! diagnostic that comes back.

use tacit::ast::{
    definitions::{Constructor, Definition},
    expressions::{Expr, Literal},
    types::{FunctionType, Type},
};
use tacit::parser::parser::parse;

#[test]
fn test_parse_program_with_several_definitions() {
    let source = "
        type Bool
            | True
            | False

        # equality on numbers
        def eq? (Num, Num -> Bool) = num-eq

        def major (Num) = 18 >
    ";

    let ast = parse(source).unwrap();

    assert_eq!(ast.len(), 3);
    assert!(matches!(&ast[0], Definition::TypeDef { name, .. } if name == "Bool"));
    assert!(matches!(&ast[1], Definition::TermDef { name, .. } if name == "eq?"));
    assert!(matches!(&ast[2], Definition::TermDef { name, .. } if name == "major"));
}

#[test]
fn test_every_term_body_is_non_empty() {
    let source = "def a () = [] def b () = match def c ( -> Num) = 1";
    let ast = parse(source).unwrap();

    for definition in &ast {
        if let Definition::TermDef { body, .. } = definition {
            assert!(!body.is_empty());
        }
    }
}

#[test]
fn test_major_example_full_shape() {
    let ast = parse("def major (Num) = 18 >").unwrap();

    assert_eq!(
        ast,
        vec![Definition::TermDef {
            name: "major".to_string(),
            generics: vec![],
            function_type: FunctionType::Function {
                inputs: vec![FunctionType::Cell(Type {
                    name: "Num".to_string(),
                    generics: vec![],
                })],
                outputs: vec![],
            },
            assignments: vec![],
            body: vec![
                Expr::Literal(Literal::Num(18.0)),
                Expr::Term {
                    id: ">".to_string(),
                },
            ],
        }]
    );
}

#[test]
fn test_bool_type_definition() {
    let ast = parse("type Bool | True | False").unwrap();

    let Definition::TypeDef { constructors, .. } = &ast[0] else {
        panic!("expected a type definition");
    };

    assert_eq!(
        constructors,
        &vec![
            Constructor {
                name: "True".to_string(),
                types: vec![],
            },
            Constructor {
                name: "False".to_string(),
                types: vec![],
            },
        ]
    );
}

#[test]
fn test_zero_branch_match_is_accepted() {
    let ast = parse("def f (Void) = match").unwrap();

    let Definition::TermDef { body, .. } = &ast[0] else {
        panic!("expected a term definition");
    };

    assert_eq!(body, &vec![Expr::Match { branches: vec![] }]);
}

#[test]
fn test_chevron_as_definition_name() {
    let ast = parse("def < (Num, Num -> Bool) = lt").unwrap();

    assert!(matches!(&ast[0], Definition::TermDef { name, .. } if name == "<"));
}

#[test]
fn test_optional_comma_equivalence() {
    let with_commas = parse("def f (Num, Num) = drop").unwrap();
    let without_commas = parse("def f (Num Num) = drop").unwrap();

    assert_eq!(with_commas, without_commas);
}

#[test]
fn test_malformed_fraction_diagnostic() {
    let error = parse("def f ( -> Num) = 3.").unwrap_err();

    assert_eq!(error.message(), "Expected a number after '.'");
    assert_eq!(error.location().line, 1);
    assert_eq!(error.location().column, 20);
}

#[test]
fn test_unterminated_string_diagnostic() {
    let error = parse("def f ( -> Str) = \"abc").unwrap_err();

    assert_eq!(error.message(), "Unexpected end of file");
}

#[test]
fn test_first_error_wins() {
    // Both definitions are malformed; only the first is reported.
    let error = parse("def f (Num) 1\ndef (Num) = 2").unwrap_err();

    assert_eq!(error.message(), "Expected Equal but found Num");
    assert_eq!(error.location().line, 1);
}

#[test]
fn test_rendered_diagnostic_format() {
    let error = parse("def f (Num) = match | 5 []").unwrap_err();

    assert_eq!(
        error.to_string(),
        "Expected identifier at line 1\n\ndef f (Num) = match | 5 []\n                      ^\n\n"
    );
}

#[test]
fn test_independent_parses_are_structurally_equal() {
    let source = "type Option <a> | None | Some(a) def get (Option<a>, a -> a) = swap match";

    let first = parse(source).unwrap();
    let second = parse(source).unwrap();

    assert_eq!(first, second);
}
