//! Tree-walking evaluator: recursively interprets an AST against an
//! [`Environment`](crate::object::Environment).
//!
//! Dispatch is a single `eval_expression`/`eval_statement` pair of matches
//! over the AST's tagged enums, mirroring the parser's own structure.
//! `ReturnValue` and `Error` are ordinary `Value` variants that short-circuit
//! evaluation at the points the language specifies (see the module-level
//! comments below each dispatch arm).

use crate::ast::expression::{
    CallExpression, Expression, FunctionLiteral, IfExpression, IndexExpression, InfixExpression,
    PrefixExpression,
};
use crate::ast::statement::{BlockStatement, LetStatement, ReturnStatement, Statement};
use crate::ast::Program;
use crate::object::{Environment, Value, builtins};
use std::rc::Rc;

/// Evaluates an entire program. The result of the program is the result of
/// its last statement; a top-level `return` unwraps immediately.
pub fn eval_program(program: &Program, env: &Environment) -> Value {
    log::debug!(
        "starting to evaluate program, {} statements",
        program.statements.len()
    );
    let mut result = Value::Null;
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match result {
            Value::ReturnValue(value) => {
                log::debug!("program returned early via top-level return");
                return *value;
            }
            Value::Error(_) => return result,
            _ => {}
        }
    }
    log::debug!("finished evaluating program");
    result
}

/// Evaluates a block's statements without unwrapping `ReturnValue`, so a
/// nested block's return propagates up to the enclosing function boundary.
fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Value {
    let mut result = Value::Null;
    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Environment) -> Value {
    match stmt {
        Statement::Let(let_stmt) => eval_let_statement(let_stmt, env),
        Statement::Return(return_stmt) => eval_return_statement(return_stmt, env),
        Statement::Expression(expr_stmt) => eval_expression(&expr_stmt.value, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_let_statement(stmt: &LetStatement, env: &Environment) -> Value {
    let value = match &stmt.value {
        Some(expr) => eval_expression(expr, env),
        None => Value::Null,
    };
    if value.is_error() {
        return value;
    }
    env.set(stmt.name.value.clone(), value)
}

fn eval_return_statement(stmt: &ReturnStatement, env: &Environment) -> Value {
    let value = match &stmt.value {
        Some(expr) => eval_expression(expr, env),
        None => Value::Null,
    };
    if value.is_error() {
        return value;
    }
    Value::ReturnValue(Box::new(value))
}

fn eval_expression(expr: &Expression, env: &Environment) -> Value {
    log::trace!("evaluating expression {:?}", expr);
    match expr {
        Expression::IntegerLiteral(lit) => Value::Integer(lit.value),
        Expression::BooleanLiteral(lit) => Value::Boolean(lit.value),
        Expression::StringLiteral(lit) => Value::String(Rc::from(lit.value.as_str())),
        Expression::ArrayLiteral(lit) => eval_array_literal(&lit.elements, env),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::PrefixExpression(expr) => eval_prefix_expression(expr, env),
        Expression::InfixExpression(expr) => eval_infix_expression(expr, env),
        Expression::IndexExpression(expr) => eval_index_expression(expr, env),
        Expression::IfExpression(expr) => eval_if_expression(expr, env),
        Expression::FunctionLiteral(lit) => eval_function_literal(lit, env),
        Expression::CallExpression(expr) => eval_call_expression(expr, env),
    }
}

fn eval_array_literal(elements: &[Expression], env: &Environment) -> Value {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        let value = eval_expression(element, env);
        if value.is_error() {
            return value;
        }
        values.push(value);
    }
    Value::Array(Rc::new(values))
}

fn eval_identifier(name: &str, env: &Environment) -> Value {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    log::error!("identifier not found: {}", name);
    Value::error(format!("identifier not found: {}", name))
}

fn eval_prefix_expression(expr: &PrefixExpression, env: &Environment) -> Value {
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }
    match expr.operator.as_str() {
        "!" => eval_bang_operator(&right),
        "-" => eval_minus_prefix_operator(&right),
        op => {
            log::error!("unknown operator: {}{}", op, right.type_name());
            Value::error(format!("unknown operator: {}{}", op, right.type_name()))
        }
    }
}

fn eval_bang_operator(value: &Value) -> Value {
    Value::Boolean(!value.is_truthy())
}

fn eval_minus_prefix_operator(value: &Value) -> Value {
    match value {
        Value::Integer(i) => Value::Integer(i.wrapping_neg()),
        other => {
            log::error!("unknown operator: -{}", other.type_name());
            Value::error(format!("unknown operator: -{}", other.type_name()))
        }
    }
}

fn eval_infix_expression(expr: &InfixExpression, env: &Environment) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }
    apply_infix_operator(&expr.operator, left, right)
}

fn apply_infix_operator(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        _ if left.type_name() != right.type_name() => {
            log::error!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            );
            Value::error(format!(
                "type mismatch: {} {} {}",
                left.type_name(),
                operator,
                right.type_name()
            ))
        }
        _ => match operator {
            "==" => Value::Boolean(values_identical(&left, &right)),
            "!=" => Value::Boolean(!values_identical(&left, &right)),
            _ => {
                log::error!(
                    "unknown operator: {} {} {}",
                    left.type_name(),
                    operator,
                    right.type_name()
                );
                Value::error(format!(
                    "unknown operator: {} {} {}",
                    left.type_name(),
                    operator,
                    right.type_name()
                ))
            }
        },
    }
}

/// Identity comparison used for `==`/`!=` between two values of the same
/// non-Integer, non-String kind. Booleans and Null compare by their plain
/// Rust equality (they are effectively singletons); closures compare by
/// pointer identity of their captured environment.
fn values_identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (Value::Function { env: le, .. }, Value::Function { env: re, .. }) => le.ptr_eq(re),
        _ => false,
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                log::error!("division by zero");
                Value::error("division by zero")
            } else {
                Value::Integer(left / right)
            }
        }
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        op => {
            log::error!("unknown operator: INTEGER {} INTEGER", op);
            Value::error(format!("unknown operator: INTEGER {} INTEGER", op))
        }
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(Rc::from(format!("{}{}", left, right))),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        op => {
            log::error!("unknown operator: STRING {} STRING", op);
            Value::error(format!("unknown operator: STRING {} STRING", op))
        }
    }
}

fn eval_index_expression(expr: &IndexExpression, env: &Environment) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&expr.index, env);
    if index.is_error() {
        return index;
    }
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Value::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        _ => {
            log::error!("index operator not supported: {}", left.type_name());
            Value::error(format!("index operator not supported: {}", left.type_name()))
        }
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Environment) -> Value {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_function_literal(lit: &FunctionLiteral, env: &Environment) -> Value {
    Value::Function {
        parameters: Rc::new(lit.parameters.clone()),
        body: Rc::new(lit.body.clone()),
        env: env.clone(),
    }
}

fn eval_call_expression(expr: &CallExpression, env: &Environment) -> Value {
    log::trace!("evaluating call expression with {} argument(s)", expr.arguments.len());
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let mut args = Vec::with_capacity(expr.arguments.len());
    for arg_expr in &expr.arguments {
        let arg = eval_expression(arg_expr, env);
        if arg.is_error() {
            return arg;
        }
        args.push(arg);
    }

    apply_function(&function, args)
}

fn apply_function(function: &Value, args: Vec<Value>) -> Value {
    match function {
        Value::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = Environment::enclose(env);
            for (param, arg) in parameters.iter().zip(args) {
                call_env.set(param.value.clone(), arg);
            }
            let result = eval_block_statement(body, &call_env);
            match result {
                Value::ReturnValue(value) => *value,
                other => other,
            }
        }
        Value::Builtin(builtin) => builtin(args),
        other => {
            log::error!("not a function {}", other);
            Value::error(format!("not a function {}", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval_input(input: &str) -> Value {
        let lexer = Lexer::new(input.to_string());
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "parser errors: {:?}",
            parser.errors()
        );
        let env = Environment::new();
        eval_program(&program, &env)
    }

    fn assert_integer(value: &Value, expected: i64) {
        match value {
            Value::Integer(i) => assert_eq!(*i, expected),
            other => panic!("expected Integer({}), got {:?}", expected, other),
        }
    }

    #[test]
    fn evaluates_integer_arithmetic() {
        assert_integer(&eval_input("5 + 5 * 2 - 10 / 2"), 14);
    }

    #[test]
    fn evaluates_boolean_expressions() {
        match eval_input("1 < 2 == true") {
            Value::Boolean(b) => assert!(b),
            other => panic!("expected Boolean(true), got {:?}", other),
        }
    }

    #[test]
    fn bang_operator_negates_truthiness() {
        match eval_input("!5") {
            Value::Boolean(b) => assert!(!b),
            other => panic!("expected Boolean(false), got {:?}", other),
        }
    }

    #[test]
    fn if_else_short_circuits_on_falsy_condition() {
        match eval_input("if (false) { 10 }") {
            Value::Null => {}
            other => panic!("expected Null, got {:?}", other),
        }
    }

    #[test]
    fn return_unwraps_at_program_boundary() {
        assert_integer(&eval_input("9; return 2 * 5; 9;"), 10);
    }

    #[test]
    fn nested_blocks_propagate_return_without_unwrapping() {
        let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
        assert_integer(&eval_input(input), 10);
    }

    #[test]
    fn identifier_not_found_produces_error() {
        match eval_input("foobar") {
            Value::Error(msg) => assert_eq!(msg, "identifier not found: foobar"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn type_mismatch_produces_error() {
        match eval_input("5 + true;") {
            Value::Error(msg) => assert_eq!(msg, "type mismatch: INTEGER + BOOLEAN"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_operator_on_booleans_produces_error() {
        match eval_input("true + false;") {
            Value::Error(msg) => assert_eq!(msg, "unknown operator: BOOLEAN + BOOLEAN"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn division_by_zero_produces_error() {
        match eval_input("10 / 0") {
            Value::Error(msg) => assert_eq!(msg, "division by zero"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn let_statement_binds_and_resolves() {
        assert_integer(&eval_input("let a = 5; let b = a; b;"), 5);
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let input = "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(3);";
        assert_integer(&eval_input(input), 5);
    }

    #[test]
    fn string_concatenation() {
        match eval_input(r#""Hello" + " " + "World!""#) {
            Value::String(s) => assert_eq!(&*s, "Hello World!"),
            other => panic!("expected String, got {:?}", other),
        }
    }

    #[test]
    fn array_literal_and_indexing() {
        assert_integer(&eval_input("[1, 2 * 2, 3 + 3][1]"), 4);
    }

    #[test]
    fn index_out_of_bounds_is_null_not_error() {
        match eval_input("[1, 2, 3][10]") {
            Value::Null => {}
            other => panic!("expected Null, got {:?}", other),
        }
    }

    #[test]
    fn len_builtin_reports_string_and_array_length() {
        assert_integer(&eval_input(r#"len("hello")"#), 5);
        assert_integer(&eval_input("len([1, 2, 3])"), 3);
    }

    #[test]
    fn len_builtin_rejects_unsupported_type() {
        match eval_input("len(5)") {
            Value::Error(msg) => assert_eq!(msg, "argument to `len` not supported, got INTEGER"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn push_does_not_mutate_original_array() {
        assert_integer(&eval_input("let a = [1, 2]; let b = push(a, 3); len(a)"), 2);
        assert_integer(&eval_input("let a = [1, 2]; let b = push(a, 3); len(b)"), 3);
    }
}
