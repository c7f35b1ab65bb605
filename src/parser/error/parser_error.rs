//! Parser error kinds and the structured error type.

use super::span::Span;
use crate::lexer::token::{Token, TokenType};
use std::fmt;

/// All parser error kinds the language defines.
///
/// Each `Display` impl renders exactly the canonical message text the
/// language specifies, so it can be compared or substring-matched directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserErrorKind {
    /// `expect_peek` failed: the peek token was not the required kind.
    ExpectedToken {
        expected: TokenType,
        got: TokenType,
    },
    /// No prefix parse function is registered for the current token kind.
    NoPrefixParseFunction { token_type: TokenType },
    /// An INT token's literal did not parse as an `i64`.
    InvalidIntegerLiteral { literal: String },
}

impl fmt::Display for ParserErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedToken { expected, got } => {
                write!(f, "expected next token to be {}, got {} instead", expected, got)
            }
            Self::NoPrefixParseFunction { token_type } => {
                write!(f, "no prefix parse function for {} found", token_type)
            }
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {} as integer", literal)
            }
        }
    }
}

/// A parser error: its kind plus the source position it was recorded at.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    pub kind: ParserErrorKind,
    pub span: Span,
}

impl ParserError {
    /// Expected-token error at the given (offending) token's position.
    pub fn expected_token(expected: TokenType, token: &Token) -> Self {
        Self {
            kind: ParserErrorKind::ExpectedToken {
                expected,
                got: token.token_type,
            },
            span: Span::from_token(token),
        }
    }

    /// No-prefix-parse-function error at the current token's position.
    pub fn no_prefix_fn(token: &Token) -> Self {
        Self {
            kind: ParserErrorKind::NoPrefixParseFunction {
                token_type: token.token_type,
            },
            span: Span::from_token(token),
        }
    }

    /// Invalid-integer-literal error at the offending token's position.
    pub fn invalid_integer(token: &Token) -> Self {
        Self {
            kind: ParserErrorKind::InvalidIntegerLiteral {
                literal: token.literal.clone(),
            },
            span: Span::from_token(token),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParserError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_token_message() {
        let token = Token::new(TokenType::INT, "5".to_string(), 1, 9);
        let err = ParserError::expected_token(TokenType::ASSIGN, &token);
        assert_eq!(err.to_string(), "expected next token to be =, got INT instead");
    }

    #[test]
    fn invalid_integer_message() {
        let token = Token::new(TokenType::INT, "99999999999999999999".to_string(), 1, 1);
        let err = ParserError::invalid_integer(&token);
        assert_eq!(
            err.to_string(),
            "could not parse 99999999999999999999 as integer"
        );
    }
}
