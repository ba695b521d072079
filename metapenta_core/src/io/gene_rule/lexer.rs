//! Lex a gene reaction rule string into a series of tokens for later parsing

use thiserror::Error;

use crate::io::gene_rule::token::Token;

pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Convert the whole source into tokens, always terminated by [`Token::Eof`]
    pub fn lex(mut self) -> Result<Vec<Token>, LexerError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        self.tokens.push(Token::Eof);
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexerError> {
        let c = self.advance();
        match c {
            '(' => self.tokens.push(Token::LeftParen),
            ')' => self.tokens.push(Token::RightParen),
            ' ' | '\r' | '\n' | '\t' => {}
            c if Lexer::is_identifier_char(c) => self.read_identifier(),
            other => {
                return Err(LexerError::InvalidCharacter {
                    character: other,
                    position: self.start,
                })
            }
        };
        Ok(())
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn read_identifier(&mut self) {
        while !self.is_at_end() && Lexer::is_identifier_char(self.source[self.current]) {
            self.current += 1;
        }
        let text: String = self.source[self.start..self.current].iter().collect();
        let token = match text.to_lowercase().as_str() {
            "and" => Token::And,
            "or" => Token::Or,
            _ => Token::Identifier(text),
        };
        self.tokens.push(token);
    }

    /// Gene ids show up with dots, dashes and colons in published models (e.g. `s0001.1`)
    fn is_identifier_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | ':')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum LexerError {
    #[error("Invalid character `{character}` at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
