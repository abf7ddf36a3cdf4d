//! Recursive-descent parser for the search query mini-language.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! Or    := And (OR And)*
//! And   := Not (AND Not)*
//! Not   := NOT Not | Term
//! Term  := '(' Or ')' | Field? RawValue
//! Field := STRING ':'
//! RawValue := REGEX | STRING
//! ```
//!
//! Operators are left-associative at each level; parsing uses a single
//! token of lookahead. Tokens left over after the top-level expression are
//! ignored, matching how the query box behaves while the user is still
//! typing. Parse errors are structured and recoverable: the `filter` entry
//! points treat any of them as "query matches everything".

use super::ast::QueryAst;
use super::lexer::{tokenize, Token, TokenKind};
use thiserror::Error;

/// Parser errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `(` without a matching `)`
    #[error("unclosed parenthesis")]
    UnclosedParen,

    /// Input ended where a term was expected
    #[error("unexpected end of query")]
    UnexpectedEnd,

    /// `field:` with nothing after the colon
    #[error("expected value after field ':'")]
    MissingFieldValue,

    /// A token the grammar cannot start a term with
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a query string into an AST.
///
/// Empty and whitespace-only input parses to `None`, which evaluates to
/// `true` for every node.
pub fn parse_query(input: &str) -> ParseResult<Option<QueryAst>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(trimmed);
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser { tokens, pos: 0 };
    parser.parse_or().map(Some)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the current token if it is the given operator
    fn consume_operator(&mut self, name: &str) -> bool {
        match self.current() {
            Some(t) if t.kind == TokenKind::Operator && t.text == name => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn parse_or(&mut self) -> ParseResult<QueryAst> {
        let mut left = self.parse_and()?;
        while self.consume_operator("OR") {
            let right = self.parse_and()?;
            left = QueryAst::Or {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<QueryAst> {
        let mut left = self.parse_not()?;
        while self.consume_operator("AND") {
            let right = self.parse_not()?;
            left = QueryAst::And {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> ParseResult<QueryAst> {
        if self.consume_operator("NOT") {
            let operand = self.parse_not()?;
            return Ok(QueryAst::Not {
                operand: Box::new(operand),
            });
        }
        self.parse_term()
    }

    fn parse_term(&mut self) -> ParseResult<QueryAst> {
        if self.current().map(|t| t.kind) == Some(TokenKind::LParen) {
            self.pos += 1;
            let expr = self.parse_or()?;
            match self.current() {
                Some(t) if t.kind == TokenKind::RParen => {
                    self.pos += 1;
                    Ok(expr)
                }
                _ => Err(ParseError::UnclosedParen),
            }
        } else {
            self.parse_value_term()
        }
    }

    fn parse_value_term(&mut self) -> ParseResult<QueryAst> {
        let token = self.current().ok_or(ParseError::UnexpectedEnd)?;

        // A string followed by a colon commits to a field-scoped term
        if token.kind == TokenKind::Str
            && self.tokens.get(self.pos + 1).map(|t| t.kind) == Some(TokenKind::Colon)
        {
            let field = token.text.to_lowercase();
            self.pos += 2;

            let value = self.current().ok_or(ParseError::MissingFieldValue)?;
            let (value, is_regex) = match value.kind {
                TokenKind::Regex => (value.text.clone(), true),
                TokenKind::Str => (value.text.clone(), false),
                _ => return Err(ParseError::MissingFieldValue),
            };
            self.pos += 1;

            return Ok(QueryAst::Term {
                field,
                value,
                is_regex,
            });
        }

        match token.kind {
            TokenKind::Regex => {
                let value = token.text.clone();
                self.pos += 1;
                Ok(QueryAst::Term {
                    field: "name".to_string(),
                    value,
                    is_regex: true,
                })
            }
            TokenKind::Str => {
                let value = token.text.clone();
                self.pos += 1;
                Ok(QueryAst::Term {
                    field: "name".to_string(),
                    value,
                    is_regex: false,
                })
            }
            other => Err(ParseError::UnexpectedToken(other.to_string())),
        }
    }
}
