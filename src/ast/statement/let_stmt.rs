use crate::ast::Node;
use crate::ast::expression::{Expression, Identifier};
use crate::lexer::token::Token;
use std::fmt::{self, Display, Formatter};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStatement {
    /// The LET token.
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = ", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}
