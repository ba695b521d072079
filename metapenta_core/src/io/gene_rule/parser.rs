use thiserror::Error;

use crate::io::gene_rule::token::Token;
use crate::io::gene_rule::GeneRule;

/*
Gene rule grammar:
expression -> term (("AND" | "OR") term)* ;
term -> GENE | "(" expression ")" ;

`and` and `or` share one precedence level and associate to the left, as in the
rules written by COBRA tools which always parenthesize mixed expressions.
 */

/// Gene reaction rule parser
pub struct GeneRuleParser {
    /// Vector of tokens from the rule string
    tokens: Vec<Token>,
    /// Current token being processed
    current: usize,
}

impl GeneRuleParser {
    pub fn new(tokens: Vec<Token>) -> GeneRuleParser {
        GeneRuleParser { tokens, current: 0 }
    }

    /// Parse the token vector into a GeneRule AST
    pub fn parse(&mut self) -> Result<GeneRule, ParseError> {
        let rule = self.expression()?;
        if !self.is_at_end() {
            return Err(ParseError::EarlyTermination(format!("{:?}", self.peek())));
        }
        Ok(rule)
    }

    fn expression(&mut self) -> Result<GeneRule, ParseError> {
        let mut expr = self.term()?;
        loop {
            expr = match self.peek() {
                Token::And => {
                    self.advance();
                    GeneRule::And(Box::new(expr), Box::new(self.term()?))
                }
                Token::Or => {
                    self.advance();
                    GeneRule::Or(Box::new(expr), Box::new(self.term()?))
                }
                _ => return Ok(expr),
            }
        }
    }

    fn term(&mut self) -> Result<GeneRule, ParseError> {
        match self.peek().clone() {
            Token::Identifier(id) => {
                self.advance();
                Ok(GeneRule::Gene(id))
            }
            Token::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                if self.peek() != &Token::RightParen {
                    return Err(ParseError::MissingToken(
                        "Expect ')' after expression.".to_string(),
                    ));
                }
                self.advance();
                Ok(expr)
            }
            _ => Err(ParseError::ExpectedExpression),
        }
    }

    /// Advance `self.current` one position unless at the end of the tokens
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek() == &Token::Eof
    }

    fn peek(&self) -> &Token {
        // The lexer always terminates the tokens with Eof
        self.tokens.get(self.current).unwrap_or(&Token::Eof)
    }
}

/// Enum representing possible parse errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    /// Missing expected token (e.g. a right parenthesis)
    #[error("Missing expected token: {0}")]
    MissingToken(String),
    /// No expression found when one was expected
    #[error("No expression found, check that the rule is not empty and has no dangling operator")]
    ExpectedExpression,
    /// Tokens left over once a complete expression was parsed
    #[error("Parsing terminated early at {0}, check for two genes without an operator between them")]
    EarlyTermination(String),
}
