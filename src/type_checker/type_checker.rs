use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, ExprKind},
        expressions::{CallExpr, CastExpr, Literal},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{declarations::Declarations, unify::unify_operands};

/// State of one checking pass.
///
/// The checker borrows the declaration table mutably for the whole pass;
/// bindings made while checking one expression are visible to every later
/// expression checked against the same table.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    declarations: &'a mut Declarations,
    constant: bool,
}

impl<'a> TypeChecker<'a> {
    pub fn new(declarations: &'a mut Declarations, constant: bool) -> Self {
        TypeChecker { declarations, constant }
    }

    pub fn declarations(&self) -> &Declarations {
        &*self.declarations
    }

    pub fn declarations_mut(&mut self) -> &mut Declarations {
        &mut *self.declarations
    }

    /// Whether variable references are rejected.
    pub fn is_constant(&self) -> bool {
        self.constant
    }

    pub fn check(&mut self, expr: &Expr) -> Result<Type, Error> {
        type_check_expr(self, expr)
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(node = %ast.id))]
pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<Type, Error> {
    let ty = match &ast.kind {
        ExprKind::Literal(literal) => match literal {
            Literal::String(_) => Ok(Type::String),
            Literal::Bool(_) => Ok(Type::Bool),
            Literal::Number(_) => Ok(Type::Number),
            Literal::Null => Err(Error::at_node(ErrorImpl::NullNotPermitted, ast)),
        },
        ExprKind::Variable(name) => {
            if type_checker.is_constant() {
                return Err(Error::at_node(
                    ErrorImpl::ConstantExpressionViolation { variable: name.clone() },
                    ast,
                ));
            }

            match type_checker.declarations().find_variable(name) {
                Some(declaration) => Ok(declaration.slot.read()),
                None => Err(Error::at_node(
                    ErrorImpl::UndeclaredVariable { variable: name.clone() },
                    ast,
                )),
            }
        }
        ExprKind::Call(call) => type_check_call(type_checker, call, ast),
        ExprKind::Paren(inner) | ExprKind::Value(inner) => type_check_expr(type_checker, inner),
        ExprKind::Condition(condition) => unify_operands(
            type_checker,
            ast,
            &[condition.condition.as_ref()],
            &condition.kind.to_string(),
            condition.kind.permitted_types(),
        ),
        ExprKind::Cast(cast) => type_check_cast(type_checker, cast, ast),
        ExprKind::Unary(unary) => unify_operands(
            type_checker,
            ast,
            &[unary.operand.as_ref()],
            &unary.operator.to_string(),
            unary.operator.permitted_types(),
        ),
        ExprKind::Binary(binary) => {
            let ty = unify_operands(
                type_checker,
                ast,
                &[binary.left.as_ref(), binary.right.as_ref()],
                &binary.operator.to_string(),
                binary.operator.permitted_types(),
            )?;

            if binary.operator.yields_bool() {
                Ok(Type::Bool)
            } else {
                Ok(ty)
            }
        }
        ExprKind::Assignment(assignment) => unify_operands(
            type_checker,
            ast,
            &[assignment.target.as_ref(), assignment.value.as_ref()],
            &assignment.operator.to_string(),
            assignment.operator.permitted_types(),
        ),
    }?;

    trace!(ty = %ty, "checked");
    Ok(ty)
}

fn type_check_call(type_checker: &mut TypeChecker, call: &CallExpr, ast: &Expr) -> Result<Type, Error> {
    let expected = match type_checker.declarations().find_function(&call.name) {
        Some(function) => function.parameters.len(),
        None => {
            return Err(Error::at_node(
                ErrorImpl::UndeclaredFunction { function: call.name.clone() },
                ast,
            ))
        }
    };

    if call.arguments.len() != expected {
        return Err(Error::at_node(
            ErrorImpl::ArityMismatch {
                function: call.name.clone(),
                expected,
                actual: call.arguments.len(),
            },
            ast,
        ));
    }

    for (index, argument) in call.arguments.iter().enumerate() {
        let supplied = type_check_expr(type_checker, argument)?;

        // Checking the argument may itself have bound slots, so the
        // declaration is looked up again after every argument.
        let function = match type_checker.declarations_mut().find_function_mut(&call.name) {
            Some(function) => function,
            None => {
                return Err(Error::at_node(
                    ErrorImpl::UndeclaredFunction { function: call.name.clone() },
                    ast,
                ))
            }
        };
        let parameter = &mut function.parameters[index];

        if !parameter.slot.is_bound() {
            if supplied.is_resolved() {
                debug!(function = %call.name, index, ty = %supplied, "bound parameter type");
                parameter.slot.bind(supplied);
            }
            continue;
        }

        let expected = parameter.slot.read();
        if expected != supplied {
            return Err(Error::at_node(
                ErrorImpl::ParameterTypeMismatch {
                    function: call.name.clone(),
                    index,
                    expected,
                    supplied,
                },
                argument,
            ));
        }
    }

    match type_checker.declarations().find_function(&call.name) {
        Some(function) => Ok(function.slot.read()),
        None => Err(Error::at_node(
            ErrorImpl::UndeclaredFunction { function: call.name.clone() },
            ast,
        )),
    }
}

fn type_check_cast(type_checker: &mut TypeChecker, cast: &CastExpr, ast: &Expr) -> Result<Type, Error> {
    // The inner expression is checked for errors only; whether the value
    // converts is decided at run time.
    type_check_expr(type_checker, &cast.value)?;

    match Type::from_name(&cast.target) {
        Some(ty) => Ok(ty),
        None => Err(Error::at_node(
            ErrorImpl::UnsupportedCastTarget { target: cast.target.clone() },
            ast,
        )),
    }
}

/// Checks a single expression against `declarations`.
///
/// May return `Unresolved` when the expression is a bare call or variable
/// whose type has not been inferred yet.
pub fn type_check(ast: &Expr, declarations: &mut Declarations, constant: bool) -> Result<Type, Error> {
    let mut type_checker = TypeChecker::new(declarations, constant);
    type_checker.check(ast)
}
