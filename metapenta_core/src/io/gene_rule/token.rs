//! Module providing Token struct for lexing

/// Represents Tokens in a gene reaction rule
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub enum Token {
    Identifier(String),
    And,
    Or,
    LeftParen,
    RightParen,
    Eof,
}
