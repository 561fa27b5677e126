use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("xor", TokenKind::Xor);
        map.insert("not", TokenKind::Not);
        map.insert("eq", TokenKind::Equals);
        map.insert("is", TokenKind::Equals);
        map.insert("neq", TokenKind::NotEquals);
        map.insert("lt", TokenKind::Less);
        map.insert("lte", TokenKind::LessEquals);
        map.insert("gt", TokenKind::Greater);
        map.insert("gte", TokenKind::GreaterEquals);
        map.insert("if", TokenKind::If);
        map.insert("elseif", TokenKind::ElseIf);
        map.insert("string", TokenKind::StringType);
        map.insert("number", TokenKind::NumberType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("var", TokenKind::Var);
        map.insert("fn", TokenKind::Fn);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Variable,

    OpenParen,
    CloseParen,

    Equals,    // ==
    Not,       // !
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,
    Xor,

    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    True,
    False,
    Null,
    If,
    ElseIf,
    StringType,
    NumberType,
    BoolType,
    Var,
    Fn,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String | TokenKind::Identifier | TokenKind::Variable | TokenKind::Number => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }
}
