#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::{ast::Expr, types::Type},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::{declarations::parse_declarations, parser::parse},
    type_checker::{declarations::Declarations, type_checker::TypeChecker},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses a single expression.
pub fn parse_source(source: &str, file: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse(tokens, Rc::new(file.to_string()))
}

/// Tokenizes and parses a declaration file.
pub fn parse_declaration_source(source: &str, file: &str) -> Result<Declarations, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse_declarations(tokens, Rc::new(file.to_string()))
}

/// Parses and type checks one expression against `declarations`.
pub fn check_source(
    source: &str,
    file: &str,
    declarations: &mut Declarations,
    constant: bool,
) -> Result<Type, Error> {
    let expr = parse_source(source, file)?;
    TypeChecker::new(declarations, constant).check(&expr)
}

/// Checks several expressions in order within one pass.
///
/// Bindings made by earlier expressions constrain later ones. Stops at the
/// first error and reports the index of the failing expression with it.
pub fn check_all<'s>(
    sources: impl IntoIterator<Item = &'s str>,
    file: &str,
    declarations: &mut Declarations,
    constant: bool,
) -> Result<Vec<Type>, (usize, Error)> {
    let mut type_checker = TypeChecker::new(declarations, constant);
    let mut types = vec![];

    for (index, source) in sources.into_iter().enumerate() {
        let ty = parse_source(source, file)
            .and_then(|expr| type_checker.check(&expr))
            .map_err(|error| (index, error))?;
        types.push(ty);
    }

    Ok(types)
}

/// Finds the line containing byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    // Errors at end of input point just past the last character
    if pos == content.len() {
        let line_number = content.split_inclusive('\n').count().max(1);
        let line = content.split_inclusive('\n').last().unwrap_or("").to_string();
        let line_pos = line.trim_end_matches('\n').len();
        return Some((line_number, line, line_pos));
    }

    None
}

/// Renders a diagnostic with the offending source line underlined.
///
/// ```text
/// Error: TypeMismatch (All operands of an operator must have the same type)
/// -> start.yarn
///   |
/// 1 | "a" + 1
///   | ^^^^^^^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("  {}\n", error.get_message()));

    let position = error.get_position();
    output.push_str(&format!("-> {}\n", position.1));

    let (line, line_text, line_pos) = match get_line_at_position(source, position.0) {
        Some(found) => found,
        None => return output,
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let column = line_pos.saturating_sub(removed_whitespace);

    let span = error.get_span();
    let width = if span.end.0 > span.start.0 {
        (span.end.0 - span.start.0) as usize
    } else {
        1
    };
    let line_end = line_text_removed.trim_end().len();
    let width = width.min(line_end.saturating_sub(column)).max(1);

    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    output.push_str(&format!(
        "{:>padding$} {}{}\n",
        "|",
        " ".repeat(column),
        "^".repeat(width)
    ));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches(' ');
    (String::from(trimmed), string.len() - trimmed.len())
}
