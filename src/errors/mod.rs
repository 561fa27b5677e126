//! Error types and error handling for the type checker.
//!
//! This module defines the diagnostics produced while lexing, parsing and
//! type checking an expression. It includes:
//!
//! - Error structures carrying the offending node and its source span
//! - Specific error variants for each failure the checker can report
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
