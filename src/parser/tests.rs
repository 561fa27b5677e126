//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Literals, variables and calls with their value wrappers
//! - Operator precedence and associativity
//! - Conversions, conditions and compound assignments
//! - Declaration files
//! - Error cases

use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::{declarations::parse_declarations, parser::parse};
use crate::ast::ast::{Expr, ExprKind};
use crate::ast::expressions::{
    AssignmentOperator, BinaryOperator, ConditionKind, Literal, UnaryOperator,
};
use crate::ast::types::Type;
use crate::errors::errors::ErrorImpl;
use crate::lexer::lexer::tokenize;
use crate::type_checker::declarations::DeclarationKind;

fn parse_str(source: &str) -> Result<Expr, crate::errors::errors::Error> {
    let tokens = tokenize(source.to_string(), Some("test.yarn".to_string()))?;
    parse(tokens, Rc::new("test.yarn".to_string()))
}

/// Renders a tree as an s-expression, dropping ids and spans.
fn sexpr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(Literal::Number(value)) => format!("{}", value),
        ExprKind::Literal(Literal::String(value)) => format!("{:?}", value),
        ExprKind::Literal(Literal::Bool(value)) => format!("{}", value),
        ExprKind::Literal(Literal::Null) => String::from("null"),
        ExprKind::Variable(name) => name.clone(),
        ExprKind::Call(call) => {
            let arguments: Vec<String> = call.arguments.iter().map(sexpr).collect();
            format!("(call {}{})", call.name, arguments.iter().map(|a| format!(" {}", a)).collect::<String>())
        }
        ExprKind::Unary(unary) => format!("({} {})", unary.operator, sexpr(&unary.operand)),
        ExprKind::Binary(binary) => format!(
            "({} {} {})",
            binary.operator,
            sexpr(&binary.left),
            sexpr(&binary.right)
        ),
        ExprKind::Assignment(assignment) => format!(
            "({} {} {})",
            assignment.operator,
            sexpr(&assignment.target),
            sexpr(&assignment.value)
        ),
        ExprKind::Paren(inner) => format!("(paren {})", sexpr(inner)),
        ExprKind::Value(inner) => format!("[{}]", sexpr(inner)),
        ExprKind::Cast(cast) => format!("({} {})", cast.target, sexpr(&cast.value)),
        ExprKind::Condition(condition) => format!("({} {})", condition.kind, sexpr(&condition.condition)),
    }
}

#[test]
fn test_parse_literals_are_wrapped_in_values() {
    assert_eq!(sexpr(&parse_str("42").unwrap()), "[42]");
    assert_eq!(sexpr(&parse_str("\"hi\"").unwrap()), "[\"hi\"]");
    assert_eq!(sexpr(&parse_str("true").unwrap()), "[true]");
    assert_eq!(sexpr(&parse_str("null").unwrap()), "[null]");
    assert_eq!(sexpr(&parse_str("$gold").unwrap()), "[$gold]");
}

#[test]
fn test_parse_call() {
    assert_eq!(sexpr(&parse_str("random()").unwrap()), "[(call random)]");
    assert_eq!(
        sexpr(&parse_str("dice(6, $bonus + 1)").unwrap()),
        "[(call dice [6] (+ [$bonus] [1]))]"
    );
}

#[test]
fn test_parse_precedence() {
    assert_eq!(
        sexpr(&parse_str("1 + 2 * 3").unwrap()),
        "(+ [1] (* [2] [3]))"
    );
    assert_eq!(
        sexpr(&parse_str("$a or $b and $c").unwrap()),
        "(or [$a] (and [$b] [$c]))"
    );
    assert_eq!(
        sexpr(&parse_str("$a xor $b || $c").unwrap()),
        "(xor [$a] (or [$b] [$c]))"
    );
    assert_eq!(
        sexpr(&parse_str("1 < 2 == true").unwrap()),
        "(== (< [1] [2]) [true])"
    );
}

#[test]
fn test_parse_left_associative() {
    assert_eq!(
        sexpr(&parse_str("10 - 4 - 3").unwrap()),
        "(- (- [10] [4]) [3])"
    );
}

#[test]
fn test_parse_prefix() {
    assert_eq!(sexpr(&parse_str("-1 + 2").unwrap()), "(+ (- [1]) [2])");
    assert_eq!(sexpr(&parse_str("not $done and !$open").unwrap()), "(and (! [$done]) (! [$open]))");

    match parse_str("-$x").unwrap().kind {
        ExprKind::Unary(unary) => assert_eq!(unary.operator, UnaryOperator::Negate),
        other => panic!("expected unary, found {:?}", other),
    }
}

#[test]
fn test_parse_word_operators() {
    assert_eq!(
        sexpr(&parse_str("$gold gte 10 and $name is \"Mae\"").unwrap()),
        "(and (>= [$gold] [10]) (== [$name] [\"Mae\"]))"
    );
}

#[test]
fn test_parse_grouping() {
    assert_eq!(
        sexpr(&parse_str("(1 + 2) * 3").unwrap()),
        "(* (paren (+ [1] [2])) [3])"
    );
}

#[test]
fn test_parse_cast() {
    assert_eq!(sexpr(&parse_str("string(1 + 1)").unwrap()), "(string (+ [1] [1]))");
    assert_eq!(sexpr(&parse_str("number(\"4\")").unwrap()), "(number [\"4\"])");
    assert_eq!(sexpr(&parse_str("bool($x)").unwrap()), "(bool [$x])");
}

#[test]
fn test_parse_condition() {
    let expr = parse_str("if $gold > 5").unwrap();
    assert_eq!(sexpr(&expr), "(if (> [$gold] [5]))");

    match parse_str("elseif visited(\"Shop\")").unwrap().kind {
        ExprKind::Condition(condition) => assert_eq!(condition.kind, ConditionKind::ElseIf),
        other => panic!("expected condition, found {:?}", other),
    }
}

#[test]
fn test_parse_compound_assignment() {
    let expr = parse_str("$gold += 10 * 2").unwrap();
    assert_eq!(sexpr(&expr), "(+= $gold (* [10] [2]))");

    match expr.kind {
        ExprKind::Assignment(assignment) => {
            assert_eq!(assignment.operator, AssignmentOperator::AddAssign);
            assert_eq!(assignment.target.as_variable(), Some("$gold"));
        }
        other => panic!("expected assignment, found {:?}", other),
    }

    assert_eq!(sexpr(&parse_str("$x %= 3").unwrap()), "(%= $x [3])");
}

#[test]
fn test_parse_compound_assignment_requires_variable() {
    let error = parse_str("dice(6) += 1").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::InvalidAssignmentTarget);

    let error = parse_str("1 -= 1").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::InvalidAssignmentTarget);
}

#[test]
fn test_parse_assigns_unique_ids_and_spans() {
    let expr = parse_str("$a + 1").unwrap();
    let ExprKind::Binary(binary) = &expr.kind else {
        panic!("expected binary");
    };

    let mut ids = vec![expr.id, binary.left.id, binary.right.id, binary.left.unwrap_value().id];
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);

    assert_eq!(expr.span.start.0, 0);
    assert_eq!(expr.span.end.0, 6);
    assert_eq!(binary.operator, BinaryOperator::Add);
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_str("1 +").unwrap_err().get_kind(),
        ErrorImpl::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_str("1 2").unwrap_err().get_kind(),
        ErrorImpl::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_str("(1 + 2").unwrap_err().get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
    assert!(matches!(
        parse_str("dice").unwrap_err().get_kind(),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
    assert!(parse_str("").is_err());
}

fn parse_decls(source: &str) -> Result<crate::type_checker::declarations::Declarations, crate::errors::errors::Error> {
    let tokens = tokenize(source.to_string(), Some("decls.txt".to_string()))?;
    parse_declarations(tokens, Rc::new("decls.txt".to_string()))
}

#[test]
fn test_parse_declarations() {
    let declarations = parse_decls(
        "var $gold: number;\n\
         var $name: string\n\
         fn visited(node: string) -> bool\n\
         fn dice(?, number) -> ?\n\
         fn random()\n",
    )
    .unwrap();

    assert_eq!(declarations.len(), 5);

    let gold = declarations.find_variable("$gold").unwrap();
    assert_eq!(gold.kind, DeclarationKind::Variable);
    assert_eq!(gold.slot.read(), Type::Number);

    let visited = declarations.find_function("visited").unwrap();
    assert_eq!(visited.parameters.len(), 1);
    assert_eq!(visited.parameters[0].name.as_deref(), Some("node"));
    assert_eq!(visited.parameters[0].slot.read(), Type::String);
    assert_eq!(visited.slot.read(), Type::Bool);

    let dice = declarations.find_function("dice").unwrap();
    assert_eq!(dice.parameters[0].slot.read(), Type::Unresolved);
    assert_eq!(dice.parameters[1].slot.read(), Type::Number);
    assert_eq!(dice.slot.read(), Type::Unresolved);

    let random = declarations.find_function("random").unwrap();
    assert!(random.parameters.is_empty());
    assert_eq!(random.slot.read(), Type::Unresolved);
}

#[test]
fn test_parse_declarations_round_trips_display() {
    let declarations = parse_decls("fn roll(sides: number, ?) -> ?").unwrap();
    let text = declarations.iter().map(|decl| decl.to_string()).collect::<Vec<String>>().join("\n");
    assert_eq!(text, "fn roll(sides: number, ?) -> ?");
}

#[test]
fn test_parse_declarations_unknown_type() {
    let error = parse_decls("var $items: list").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnknownType {
            type_: "list".to_string()
        }
    );
}

#[test]
fn test_parse_declarations_rejects_stray_tokens() {
    assert!(parse_decls("$gold: number").is_err());
    assert!(parse_decls("var gold: number").is_err());
    assert!(parse_decls("fn f(number").is_err());
}
