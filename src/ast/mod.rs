//! Abstract Syntax Tree (AST) types for the Monkey language.
//!
//! The tree has exactly two tagged node families: [`statement::Statement`] and
//! [`expression::Expression`]. Each variant wraps a small struct carrying its
//! own payload and the token it started at, so pretty-printing and evaluation
//! reduce to exhaustive pattern matches the compiler can check.

pub mod expression;
pub mod statement;

use statement::Statement;
use std::fmt::{self, Display, Formatter};

/// Common behavior shared by every AST node: recovering the literal text of
/// the token the node began at.
pub trait Node {
    fn token_literal(&self) -> &str;
}

/// The root node of the AST: an ordered sequence of top-level statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    /// Concatenates every statement's own representation with no separator.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
