use std::fmt::Display;

use super::{ast::Expr, types::Type};

const BOOL_ONLY: &[Type] = &[Type::Bool];
const NUMBER_ONLY: &[Type] = &[Type::Number];
const STRING_OR_NUMBER: &[Type] = &[Type::String, Type::Number];
const EQUATABLE: &[Type] = &[Type::Number, Type::String, Type::Bool];

// LITERALS

/// Literal values as written in source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    And,
    Or,
    Xor,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl BinaryOperator {
    /// Types the unified operand type must belong to.
    pub fn permitted_types(&self) -> &'static [Type] {
        match self {
            BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor => BOOL_ONLY,
            BinaryOperator::Add => STRING_OR_NUMBER,
            BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo => NUMBER_ONLY,
            BinaryOperator::Less
            | BinaryOperator::LessEquals
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEquals => NUMBER_ONLY,
            BinaryOperator::Equals | BinaryOperator::NotEquals => EQUATABLE,
        }
    }

    /// Comparison and equality operators always produce a Bool.
    pub fn yields_bool(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Less
                | BinaryOperator::LessEquals
                | BinaryOperator::Greater
                | BinaryOperator::GreaterEquals
                | BinaryOperator::Equals
                | BinaryOperator::NotEquals
        )
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::Xor => "xor",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    pub fn permitted_types(&self) -> &'static [Type] {
        match self {
            UnaryOperator::Negate => NUMBER_ONLY,
            UnaryOperator::Not => BOOL_ONLY,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Not => write!(f, "!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
}

impl AssignmentOperator {
    pub fn permitted_types(&self) -> &'static [Type] {
        match self {
            AssignmentOperator::AddAssign => STRING_OR_NUMBER,
            _ => NUMBER_ONLY,
        }
    }
}

impl Display for AssignmentOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
            AssignmentOperator::ModuloAssign => "%=",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    If,
    ElseIf,
}

impl ConditionKind {
    pub fn permitted_types(&self) -> &'static [Type] {
        BOOL_ONLY
    }
}

impl Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionKind::If => write!(f, "if"),
            ConditionKind::ElseIf => write!(f, "elseif"),
        }
    }
}

// COMPOUND EXPRESSIONS

/// Function call, e.g. `visited("Start")`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

/// Compound assignment such as `$gold += 10`.
///
/// The parser only builds these with a variable as the target.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub target: Box<Expr>,
    pub operator: AssignmentOperator,
    pub value: Box<Expr>,
}

/// Type conversion, e.g. `string($gold)`.
///
/// The target is kept as written so that unknown names can be reported
/// by the checker rather than the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub target: String,
    pub value: Box<Expr>,
}

/// Clause of an `if` / `elseif` block.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionExpr {
    pub kind: ConditionKind,
    pub condition: Box<Expr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons_yield_bool() {
        assert!(BinaryOperator::Less.yields_bool());
        assert!(BinaryOperator::Equals.yields_bool());
        assert!(BinaryOperator::NotEquals.yields_bool());
        assert!(!BinaryOperator::Add.yields_bool());
        assert!(!BinaryOperator::And.yields_bool());
    }

    #[test]
    fn test_permitted_types() {
        assert_eq!(BinaryOperator::Add.permitted_types(), &[Type::String, Type::Number]);
        assert_eq!(BinaryOperator::Modulo.permitted_types(), &[Type::Number]);
        assert_eq!(BinaryOperator::Xor.permitted_types(), &[Type::Bool]);
        assert_eq!(AssignmentOperator::AddAssign.permitted_types(), &[Type::String, Type::Number]);
        assert_eq!(AssignmentOperator::DivideAssign.permitted_types(), &[Type::Number]);
        assert_eq!(UnaryOperator::Not.permitted_types(), &[Type::Bool]);
        assert_eq!(ConditionKind::ElseIf.permitted_types(), &[Type::Bool]);
    }
}
