//! Integration tests for end-to-end checking.
//!
//! These tests verify that the complete pipeline works correctly from a
//! declaration file and expression sources through tokenization, parsing,
//! type checking and diagnostic rendering.

use dialogue_typeck::{
    ast::types::Type,
    check_all, check_source,
    errors::errors::ErrorImpl,
    parse_declaration_source, render_error,
    type_checker::declarations::Declarations,
};
use pretty_assertions::assert_eq;

const DECLARATIONS: &str = "
// story state
var $gold: number
var $name: string
var $met_wizard: bool

fn visited(node: string) -> bool
fn dice(sides: ?) -> ?
fn coin_flip() -> ?
fn greeting(?, ?) -> string
";

fn declarations() -> Declarations {
    parse_declaration_source(DECLARATIONS, "story.decl").unwrap()
}

fn signatures(declarations: &Declarations) -> Vec<String> {
    declarations.iter().map(|decl| decl.to_string()).collect()
}

#[test]
fn test_check_story_script() {
    let mut declarations = declarations();

    let types = check_all(
        [
            "if visited(\"Tavern\") and $gold >= 10",
            "$gold -= dice(6)",
            "$name += \" the bold\"",
            "elseif coin_flip() == $met_wizard",
            "greeting($name, $gold) == \"hello\"",
            "string(dice(20)) + \" gold\"",
        ],
        "start.yarn",
        &mut declarations,
        false,
    )
    .unwrap();

    assert_eq!(
        types,
        vec![Type::Bool, Type::Number, Type::String, Type::Bool, Type::Bool, Type::String]
    );

    assert_eq!(
        signatures(&declarations),
        vec![
            "var $gold: number",
            "var $name: string",
            "var $met_wizard: bool",
            "fn visited(node: string) -> bool",
            "fn dice(sides: number) -> number",
            "fn coin_flip() -> bool",
            "fn greeting(string, number) -> string",
        ]
    );
    assert!(declarations.unresolved().is_empty());
}

#[test]
fn test_first_error_stops_the_pass() {
    let mut declarations = declarations();

    let (index, error) = check_all(
        ["dice(6) > 3", "dice(6) + \"!\"", "coin_flip() and true"],
        "start.yarn",
        &mut declarations,
        false,
    )
    .unwrap_err();

    assert_eq!(index, 1);
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::TypeMismatch {
            operator: "+".to_string(),
            types: vec![Type::Number, Type::String]
        }
    );

    // The third expression was never checked
    let unresolved: Vec<&str> = declarations
        .unresolved()
        .iter()
        .map(|decl| decl.name.as_str())
        .collect();
    assert_eq!(unresolved, vec!["coin_flip", "greeting"]);
}

#[test]
fn test_constant_expressions() {
    let mut declarations = declarations();

    assert_eq!(
        check_source("10 * 2 + 1", "config", &mut declarations, true).unwrap(),
        Type::Number
    );
    assert_eq!(
        check_source("visited(\"Start\")", "config", &mut declarations, true).unwrap(),
        Type::Bool
    );

    let error = check_source("$gold + 1", "config", &mut declarations, true).unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ConstantExpressionViolation { variable: "$gold".to_string() }
    );
}

#[test]
fn test_rendered_diagnostic() {
    let mut declarations = declarations();
    let source = "$gold > \"ten\"";

    let error = check_source(source, "start.yarn", &mut declarations, false).unwrap_err();
    let rendered = render_error(&error, source);

    assert_eq!(
        rendered,
        "Error: TypeMismatch (All operands of an operator must have the same type)\n  \
         all operands of `>` must have the same type, found: Number, String\n\
         -> start.yarn\n  \
         |\n\
         1 | $gold > \"ten\"\n  \
         | ^^^^^^^^^^^^^\n"
    );
}

#[test]
fn test_parse_errors_are_reported() {
    let mut declarations = declarations();

    let error = check_source("$gold +", "start.yarn", &mut declarations, false).unwrap_err();
    assert!(matches!(error.get_kind(), ErrorImpl::UnexpectedToken { .. }));

    let error = parse_declaration_source("var $gold: money", "story.decl").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnknownType { type_: "money".to_string() }
    );
}
