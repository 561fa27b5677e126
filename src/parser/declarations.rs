//! Parser for declaration files.
//!
//! ```text
//! // variables
//! var $gold: number
//! var $name: string;
//!
//! // functions, `?` leaves a type to be inferred
//! fn visited(node: string) -> bool
//! fn dice(number) -> ?
//! fn random() -> number
//! ```
//!
//! A function without `-> type` has an unresolved return type.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    type_checker::declarations::{Declaration, Declarations, Parameter},
};

use super::parser::Parser;

pub fn parse_declarations(tokens: Vec<Token>, file: Rc<String>) -> Result<Declarations, Error> {
    let mut parser = Parser::new(tokens, file);
    let mut declarations = Declarations::new();

    while parser.has_tokens() {
        let declaration = match parser.current_token_kind() {
            TokenKind::Var => parse_variable_declaration(&mut parser)?,
            TokenKind::Fn => parse_function_declaration(&mut parser)?,
            _ => {
                let token = parser.current_token();
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value.clone(),
                        message: String::from("expected `var` or `fn`"),
                    },
                    token.span.start.clone(),
                ));
            }
        };
        declarations.push(declaration);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
    }

    debug!(count = declarations.len(), "parsed declarations");
    Ok(declarations)
}

fn parse_variable_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.expect(TokenKind::Var)?;
    let name = parser.expect(TokenKind::Variable)?;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser)?;

    Ok(Declaration::variable(&name.value, ty))
}

fn parse_function_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    parser.expect(TokenKind::Fn)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parse_parameter(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        parse_type(parser)?
    } else {
        Type::Unresolved
    };

    Ok(Declaration::function(&name.value, parameters, return_type))
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_token_kind(1) == TokenKind::Colon
    {
        let name = parser.advance();
        parser.advance();
        let ty = parse_type(parser)?;
        return Ok(Parameter::named(&name.value, ty));
    }

    Ok(Parameter::new(parse_type(parser)?))
}

fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.advance();
    match token.kind {
        TokenKind::NumberType => Ok(Type::Number),
        TokenKind::StringType => Ok(Type::String),
        TokenKind::BoolType => Ok(Type::Bool),
        TokenKind::Question => Ok(Type::Unresolved),
        TokenKind::Identifier => Err(Error::new(
            ErrorImpl::UnknownType { type_: token.value },
            token.span.start,
        )),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value,
                message: String::from("expected a type"),
            },
            token.span.start,
        )),
    }
}
