use crate::ast::Node;
use crate::ast::expression::Expression;
use crate::lexer::token::Token;
use std::fmt::{self, Display, Formatter};

/// A unary operator applied to its right-hand operand, e.g. `!true`, `-5`.
#[derive(Debug, Clone)]
pub struct PrefixExpression {
    /// The operator token (BANG or MINUS).
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}
