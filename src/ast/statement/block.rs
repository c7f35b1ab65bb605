use crate::ast::Node;
use crate::ast::statement::Statement;
use crate::lexer::token::Token;
use std::fmt::{self, Display, Formatter};

/// `{ <statements> }` — the body of a function or a branch of an `if`.
#[derive(Debug, Clone)]
pub struct BlockStatement {
    /// The LBRACE token.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
