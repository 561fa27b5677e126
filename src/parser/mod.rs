//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an expression tree. It uses a Pratt parser with proper operator
//! precedence and handles:
//!
//! - Literals, `$variables` and function calls (wrapped in value nodes)
//! - Unary, binary and compound assignment operators
//! - Parenthesized expressions and type conversions
//! - `if` / `elseif` condition clauses
//!
//! It also parses declaration files into a declaration table.

pub mod declarations;
pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
