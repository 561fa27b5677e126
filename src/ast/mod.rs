/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The expression node and its closed set of kinds
/// - expressions: Payloads of compound expressions and their operators
/// - types: The static types computed by the type checker
pub mod ast;
pub mod expressions;
pub mod types;
