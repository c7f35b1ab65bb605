//! Shared assertion helpers for parser and evaluator tests.
//!
//! Each helper panics with a descriptive message on mismatch rather than
//! returning a `bool`, so callers can use them as plain statements and get a
//! `#[track_caller]` location pointing at the calling test.

use super::Parser;
use crate::ast::Node;
use crate::ast::expression::Expression;
use crate::ast::statement::Statement;

/// A literal value usable as an expected value in `test_literal_expression`.
#[derive(Debug, Clone)]
pub enum Literal {
    Integer(i64),
    Identifier(String),
    Boolean(bool),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(value as i64)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Identifier(value.to_string())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

/// Fails the calling test with each parser error printed, if there are any.
#[track_caller]
pub fn check_parser_errors(p: &Parser) {
    let errors = p.errors();
    if errors.is_empty() {
        return;
    }
    println!("parser errors:");
    for err in errors {
        println!("{}", err);
    }
    panic!("parser has {} errors", errors.len());
}

#[track_caller]
pub fn test_integer_literal(exp: &Expression, value: i64) {
    let int_lit = match exp {
        Expression::IntegerLiteral(il) => il,
        _ => panic!("exp not IntegerLiteral. got={:?}", exp),
    };
    assert_eq!(int_lit.value, value, "integer literal value mismatch");
    assert_eq!(
        int_lit.token_literal(),
        value.to_string(),
        "integer literal token_literal mismatch"
    );
}

#[track_caller]
pub fn test_identifier(exp: &Expression, value: &str) {
    let ident = match exp {
        Expression::Identifier(ident) => ident,
        _ => panic!("exp not Identifier. got={:?}", exp),
    };
    assert_eq!(ident.value, value, "identifier value mismatch");
    assert_eq!(
        ident.token_literal(),
        value,
        "identifier token_literal mismatch"
    );
}

#[track_caller]
pub fn test_boolean_literal(exp: &Expression, value: bool) {
    let bool_lit = match exp {
        Expression::BooleanLiteral(bl) => bl,
        _ => panic!("exp not BooleanLiteral. got={:?}", exp),
    };
    assert_eq!(bool_lit.value, value, "boolean literal value mismatch");
}

#[track_caller]
pub fn test_literal_expression(exp: &Expression, expected: impl Into<Literal>) {
    match expected.into() {
        Literal::Integer(v) => test_integer_literal(exp, v),
        Literal::Identifier(v) => test_identifier(exp, &v),
        Literal::Boolean(v) => test_boolean_literal(exp, v),
    }
}

#[track_caller]
pub fn test_infix_expression(
    exp: &Expression,
    left: impl Into<Literal>,
    operator: &str,
    right: impl Into<Literal>,
) {
    let infix = match exp {
        Expression::InfixExpression(infix) => infix,
        _ => panic!("exp not InfixExpression. got={:?}", exp),
    };
    test_literal_expression(&infix.left, left);
    assert_eq!(infix.operator, operator, "infix operator mismatch");
    test_literal_expression(&infix.right, right);
}

#[track_caller]
pub fn test_let_statement(stmt: &Statement, name: &str) {
    assert_eq!(stmt.token_literal(), "let", "statement is not a let statement");
    let let_stmt = match stmt {
        Statement::Let(let_stmt) => let_stmt,
        _ => panic!("stmt is not a LetStatement. got={:?}", stmt),
    };
    assert_eq!(let_stmt.name.value, name, "let statement name mismatch");
}
