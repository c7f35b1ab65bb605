use crate::ast::Node;
use crate::ast::expression::{Expression, Identifier};
use crate::ast::statement::BlockStatement;
use crate::lexer::token::Token;
use std::fmt::{self, Display, Formatter};

/// `fn(<parameters>) <body>`.
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    /// The FUNCTION token.
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(f, "{}({}) {}", self.token_literal(), params.join(", "), self.body)
    }
}

/// `<callee>(<arguments>)`.
#[derive(Debug, Clone)]
pub struct CallExpression {
    /// The LPAREN token.
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Node for CallExpression {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}
