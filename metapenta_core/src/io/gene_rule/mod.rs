//! Module for parsing gene reaction rules (e.g. `b3916 or b1723`) into AST values

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::io::gene_rule::lexer::LexerError;
use crate::io::gene_rule::parser::ParseError;

mod lexer;
pub mod parser;
mod token;

/// A gene reaction rule as an AST
#[derive(Clone, Debug, PartialEq)]
pub enum GeneRule {
    /// A terminal gene, referred to by id
    Gene(String),
    /// Both sides are required
    And(Box<GeneRule>, Box<GeneRule>),
    /// Either side suffices
    Or(Box<GeneRule>, Box<GeneRule>),
}

impl GeneRule {
    /// Ids of all genes mentioned in the rule, in order of first appearance
    pub fn gene_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            GeneRule::Gene(id) => {
                if !ids.contains(&id.as_str()) {
                    ids.push(id);
                }
            }
            GeneRule::And(left, right) | GeneRule::Or(left, right) => {
                left.collect_ids(ids);
                right.collect_ids(ids);
            }
        }
    }
}

impl Display for GeneRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneRule::Gene(id) => write!(f, "{}", id),
            GeneRule::And(left, right) => write!(f, "({} and {})", left, right),
            GeneRule::Or(left, right) => write!(f, "({} or {})", left, right),
        }
    }
}

/// Parse a gene reaction rule string into a GeneRule tree
///
/// # Examples
/// ```rust
/// use metapenta_core::io::gene_rule::parse_gene_rule;
/// let rule = parse_gene_rule("(b0001 and b0002) or b0003").unwrap();
/// assert_eq!(rule.gene_ids(), vec!["b0001", "b0002", "b0003"]);
/// ```
pub fn parse_gene_rule(input: &str) -> Result<GeneRule, GeneRuleParseError> {
    let tokens = lexer::Lexer::new(input).lex()?;
    let rule = parser::GeneRuleParser::new(tokens).parse()?;
    Ok(rule)
}

/// Enum representing possible lex and parse errors
#[derive(Debug, Error)]
pub enum GeneRuleParseError {
    /// Lexing Error
    #[error("Error occurred during lexing (conversion of rule string to tokens)")]
    LexingError(#[from] LexerError),
    /// Parsing Error
    #[error("Error occurred during parsing (conversion of tokens to rule tree)")]
    ParsingError(#[from] ParseError),
}
