//! Type definitions shared by the parser and the type checker.
//!
//! The expression language only knows three concrete types. `Unresolved`
//! is a placeholder used while a declaration's type has not been inferred
//! yet, and may flow through the checker as an intermediate value.

use std::fmt::Display;

/// The static type of an expression or a declaration slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Unresolved,
    Bool,
    Number,
    String,
}

impl Type {
    /// Maps a source-level type name to a concrete type.
    ///
    /// Used for cast targets (`string(...)`) and declaration files.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "number" => Some(Type::Number),
            "string" => Some(Type::String),
            "bool" => Some(Type::Bool),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        *self != Type::Unresolved
    }

    /// The name used for this type in declaration files; `?` when unresolved.
    pub fn source_name(&self) -> &'static str {
        match self {
            Type::Unresolved => "?",
            Type::Bool => "bool",
            Type::Number => "number",
            Type::String => "string",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Unresolved => write!(f, "Unresolved"),
            Type::Bool => write!(f, "Bool"),
            Type::Number => write!(f, "Number"),
            Type::String => write!(f, "String"),
        }
    }
}

/// Formats a list of types as `Number, String`.
pub fn format_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|ty| ty.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
