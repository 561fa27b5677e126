use std::fmt::Display;

use crate::Span;

use super::expressions::{
    AssignmentExpr, BinaryExpr, CallExpr, CastExpr, ConditionExpr, Literal, UnaryExpr,
};

/// Identifies a node within one parsed tree.
///
/// Diagnostics carry the id of the node they were raised on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Expression Kinds
///
/// The closed set of expression shapes the checker understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    /// `$name`
    Variable(String),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
    /// `( expr )`
    Paren(Box<Expr>),
    /// Wrapper the parser places around literals, variables and calls.
    Value(Box<Expr>),
    Cast(CastExpr),
    Condition(ConditionExpr),
}

/// Expression
///
/// A node in the expression tree together with its id and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub id: NodeId,
    pub span: Span,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(id: NodeId, span: Span, kind: ExprKind) -> Self {
        Expr { id, span, kind }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// Strips any number of value wrappers.
    ///
    /// Parentheses are not stripped.
    pub fn unwrap_value(&self) -> &Expr {
        let mut expr = self;
        while let ExprKind::Value(inner) = &expr.kind {
            expr = inner;
        }
        expr
    }

    /// Returns the call node if this is a function call, directly or
    /// through value wrappers.
    pub fn as_call(&self) -> Option<&CallExpr> {
        match &self.unwrap_value().kind {
            ExprKind::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Returns the variable name if this is a variable reference, directly
    /// or through value wrappers.
    pub fn as_variable(&self) -> Option<&str> {
        match &self.unwrap_value().kind {
            ExprKind::Variable(name) => Some(name),
            _ => None,
        }
    }
}
