//! Operand unification shared by every operator.
//!
//! All operands of an operator must agree on one type. The first operand
//! with a known type decides it; calls to functions whose return type is
//! still unresolved are then bound to that type.

use tracing::debug;

use crate::{
    ast::{ast::Expr, types::Type},
    errors::errors::{Error, ErrorImpl},
};

use super::type_checker::{type_check_expr, TypeChecker};

/// Computes the single type shared by `operands`.
///
/// `node` is the operator expression errors are reported on; `operator`
/// is its label in messages. Comparison operators turn the result into a
/// Bool themselves, this function always returns the operand type.
pub fn unify_operands(
    type_checker: &mut TypeChecker,
    node: &Expr,
    operands: &[&Expr],
    operator: &str,
    permitted: &[Type],
) -> Result<Type, Error> {
    let mut types = Vec::with_capacity(operands.len());
    for operand in operands {
        types.push(type_check_expr(type_checker, operand)?);
    }

    let expression_type = match types.iter().find(|ty| ty.is_resolved()) {
        Some(ty) => *ty,
        None => {
            return Err(Error::at_node(
                ErrorImpl::AmbiguousExpressionType { operator: operator.to_string() },
                node,
            ))
        }
    };

    for (operand, ty) in operands.iter().zip(types.iter_mut()) {
        let call = match operand.as_call() {
            Some(call) => call,
            None => continue,
        };

        let function = match type_checker.declarations_mut().find_function_mut(&call.name) {
            Some(function) => function,
            None => {
                return Err(Error::at_node(
                    ErrorImpl::UndeclaredFunction { function: call.name.clone() },
                    operand,
                ))
            }
        };

        // A slot bound while visiting a sibling operand leaves this
        // operand's recorded type as it was
        if !function.slot.is_bound() {
            debug!(function = %call.name, ty = %expression_type, "bound return type");
            function.slot.bind(expression_type);
            *ty = expression_type;
        }
    }

    if types.iter().any(|ty| *ty != expression_type) {
        return Err(Error::at_node(
            ErrorImpl::TypeMismatch { operator: operator.to_string(), types },
            node,
        ));
    }

    if !permitted.contains(&expression_type) {
        return Err(Error::at_node(
            ErrorImpl::OperatorTypeMismatch {
                operator: operator.to_string(),
                permitted: permitted.to_vec(),
                types,
            },
            node,
        ));
    }

    Ok(expression_type)
}
