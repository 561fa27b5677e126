//! Type checking module.
//!
//! This module computes the static type of an expression tree against a
//! table of declared variables and functions. It:
//!
//! - Verifies the operand types of every operator
//! - Resolves variable and function references
//! - Checks function call arity and argument types
//! - Infers parameter and return types left unresolved in declarations,
//!   binding each one at most once per pass
//!
//! Checking is fail-fast: the first error aborts the pass.

pub mod declarations;
pub mod type_checker;
pub mod unify;
