use crate::ast::Node;
use crate::ast::expression::Expression;
use crate::lexer::token::Token;
use std::fmt::{self, Display, Formatter};

/// An expression used where a statement is expected, e.g. a bare call or
/// identifier on its own line.
#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    pub value: Expression,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
