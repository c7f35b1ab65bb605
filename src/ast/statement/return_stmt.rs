use crate::ast::Node;
use crate::ast::expression::Expression;
use crate::lexer::token::Token;
use std::fmt::{self, Display, Formatter};

/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStatement {
    /// The RETURN token.
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "return ")?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}
