use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::{
        ast::{Expr, NodeId},
        types::{format_types, Type},
    },
    Position, Span,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
    node: Option<NodeId>,
}

impl Error {
    /// Creates an error raised before a tree exists (lexing, parsing).
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            span: Span {
                start: position.clone(),
                end: position,
            },
            node: None,
        }
    }

    /// Creates an error attached to the offending expression node.
    pub fn at_node(error_impl: ErrorImpl, node: &Expr) -> Self {
        Error {
            internal_error: error_impl,
            span: node.get_span().clone(),
            node: Some(node.id),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::ConstantExpressionViolation { .. } => "ConstantExpressionViolation",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::UndeclaredFunction { .. } => "UndeclaredFunction",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::ParameterTypeMismatch { .. } => "ParameterTypeMismatch",
            ErrorImpl::NullNotPermitted => "NullNotPermitted",
            ErrorImpl::AmbiguousExpressionType { .. } => "AmbiguousExpressionType",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::OperatorTypeMismatch { .. } => "OperatorTypeMismatch",
            ErrorImpl::UnsupportedCastTarget { .. } => "UnsupportedCastTarget",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only variables such as `$gold` can appear on the left of a compound assignment",
            )),
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected `number`, `string`, `bool` or `?`",
                type_
            )),
            ErrorImpl::ConstantExpressionViolation { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` cannot be used where a constant value is required",
                variable
            )),
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UndeclaredFunction { function } => {
                ErrorTip::Suggestion(format!("Function `{}` not declared", function))
            }
            ErrorImpl::ArityMismatch { expected, actual, .. } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, actual
            )),
            ErrorImpl::ParameterTypeMismatch {
                expected, supplied, ..
            } => ErrorTip::Suggestion(format!(
                "Expected argument type `{}`, received `{}`",
                expected, supplied
            )),
            ErrorImpl::NullNotPermitted => ErrorTip::Suggestion(String::from(
                "Null is not a value in this language",
            )),
            ErrorImpl::AmbiguousExpressionType { .. } => ErrorTip::Suggestion(String::from(
                "Wrap at least one operand in a conversion such as `number(...)` or `string(...)`",
            )),
            ErrorImpl::TypeMismatch { .. } => ErrorTip::Suggestion(String::from(
                "All operands of an operator must have the same type",
            )),
            ErrorImpl::OperatorTypeMismatch { operator, permitted, .. } => {
                ErrorTip::Suggestion(format!(
                    "`{}` only accepts {}",
                    operator,
                    format_types(permitted)
                ))
            }
            ErrorImpl::UnsupportedCastTarget { target } => ErrorTip::Suggestion(format!(
                "Cannot convert to `{}`, expected `number`, `string` or `bool`",
                target
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.get_error_name(), self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing and parsing
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("the target of a compound assignment must be a variable")]
    InvalidAssignmentTarget,
    #[error("unknown type {type_:?}")]
    UnknownType { type_: String },

    // Type checking
    #[error("variable {variable:?} used in an expression that must be constant")]
    ConstantExpressionViolation { variable: String },
    #[error("variable {variable:?} not declared")]
    UndeclaredVariable { variable: String },
    #[error("function {function:?} not declared")]
    UndeclaredFunction { function: String },
    #[error("function {function:?} expects {expected} arguments, received {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },
    #[error("argument {} to {function:?} should be {expected}, received {supplied}", .index + 1)]
    ParameterTypeMismatch {
        function: String,
        index: usize,
        expected: Type,
        supplied: Type,
    },
    #[error("null is not permitted")]
    NullNotPermitted,
    #[error("type of expression using `{operator}` cannot be determined, try adding an explicit conversion to at least one operand")]
    AmbiguousExpressionType { operator: String },
    #[error("all operands of `{operator}` must have the same type, found: {}", format_types(.types))]
    TypeMismatch { operator: String, types: Vec<Type> },
    #[error("`{operator}` cannot be applied to {}: permitted types are {}", format_types(.types), format_types(.permitted))]
    OperatorTypeMismatch {
        operator: String,
        permitted: Vec<Type>,
        types: Vec<Type>,
    },
    #[error("unsupported conversion target {target:?}")]
    UnsupportedCastTarget { target: String },
}
