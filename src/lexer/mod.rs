//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts expression
//! source into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source using anchored regex patterns
//! - Recognition of keywords, word operators, identifiers and `$variables`
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
