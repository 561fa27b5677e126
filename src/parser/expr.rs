use crate::{
    ast::{
        ast::{Expr, ExprKind},
        expressions::{
            AssignmentExpr, AssignmentOperator, BinaryExpr, BinaryOperator, CallExpr, CastExpr,
            ConditionExpr, ConditionKind, Literal, UnaryExpr, UnaryOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected()),
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(token_bp) if *token_bp > bp => *token_bp,
            _ => break,
        };
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected()),
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

fn span_between(left: &Expr, right: &Expr) -> Span {
    Span {
        start: left.get_span().start.clone(),
        end: right.get_span().end.clone(),
    }
}

/// Wraps a terminal in a value node spanning the same source.
fn wrap_value(parser: &mut Parser, inner: Expr) -> Expr {
    let span = inner.get_span().clone();
    parser.node(span, ExprKind::Value(Box::new(inner)))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let kind = match token.kind {
        TokenKind::Number => match token.value.parse::<f64>() {
            Ok(value) => ExprKind::Literal(Literal::Number(value)),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value.clone() },
                    token.span.start.clone(),
                ))
            }
        },
        TokenKind::String => ExprKind::Literal(Literal::String(token.value.clone())),
        TokenKind::True => ExprKind::Literal(Literal::Bool(true)),
        TokenKind::False => ExprKind::Literal(Literal::Bool(false)),
        TokenKind::Null => ExprKind::Literal(Literal::Null),
        TokenKind::Variable => ExprKind::Variable(token.value.clone()),
        _ => return Err(parser.unexpected()),
    };
    parser.advance();

    let literal = parser.node(token.span, kind);
    Ok(wrap_value(parser, literal))
}

/// `name(arg, ...)`
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;

    let call = parser.node(
        Span {
            start: name.span.start.clone(),
            end: close.span.end.clone(),
        },
        ExprKind::Call(CallExpr {
            name: name.value,
            arguments,
        }),
    );
    Ok(wrap_value(parser, call))
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        TokenKind::Xor => Some(BinaryOperator::Xor),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Dash => Some(BinaryOperator::Subtract),
        TokenKind::Star => Some(BinaryOperator::Multiply),
        TokenKind::Slash => Some(BinaryOperator::Divide),
        TokenKind::Percent => Some(BinaryOperator::Modulo),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEquals => Some(BinaryOperator::LessEquals),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEquals => Some(BinaryOperator::GreaterEquals),
        TokenKind::Equals => Some(BinaryOperator::Equals),
        TokenKind::NotEquals => Some(BinaryOperator::NotEquals),
        _ => None,
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = match binary_operator(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected()),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(parser.node(
        span_between(&left, &right),
        ExprKind::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }),
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Dash => UnaryOperator::Negate,
        _ => UnaryOperator::Not,
    };
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(parser.node(
        Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        ExprKind::Unary(UnaryExpr {
            operator,
            operand: Box::new(rhs),
        }),
    ))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::PlusEquals => AssignmentOperator::AddAssign,
        TokenKind::MinusEquals => AssignmentOperator::SubtractAssign,
        TokenKind::StarEquals => AssignmentOperator::MultiplyAssign,
        TokenKind::SlashEquals => AssignmentOperator::DivideAssign,
        _ => AssignmentOperator::ModuloAssign,
    };

    // The target is stored as the bare variable, not its value wrapper
    let target = match left.as_variable() {
        Some(_) => left.unwrap_value().clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget,
                left.get_span().start.clone(),
            ))
        }
    };

    // Right associative
    let rhs = parse_expr(parser, BindingPower::Default)?;

    Ok(parser.node(
        span_between(&left, &rhs),
        ExprKind::Assignment(AssignmentExpr {
            target: Box::new(target),
            operator,
            value: Box::new(rhs),
        }),
    ))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(parser.node(
        Span {
            start: open.span.start,
            end: close.span.end,
        },
        ExprKind::Paren(Box::new(expr)),
    ))
}

/// `string(expr)`, `number(expr)`, `bool(expr)`
pub fn parse_cast_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let target = parser.advance();
    parser.expect(TokenKind::OpenParen)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(parser.node(
        Span {
            start: target.span.start.clone(),
            end: close.span.end,
        },
        ExprKind::Cast(CastExpr {
            target: target.value,
            value: Box::new(value),
        }),
    ))
}

/// `if expr` / `elseif expr`
pub fn parse_condition_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance();
    let kind = match keyword.kind {
        TokenKind::If => ConditionKind::If,
        _ => ConditionKind::ElseIf,
    };
    let condition = parse_expr(parser, BindingPower::Default)?;

    Ok(parser.node(
        Span {
            start: keyword.span.start.clone(),
            end: condition.get_span().end.clone(),
        },
        ExprKind::Condition(ConditionExpr {
            kind,
            condition: Box::new(condition),
        }),
    ))
}
