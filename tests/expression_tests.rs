use monkey_lang::ast::expression::Expression;
use monkey_lang::ast::statement::Statement;
use monkey_lang::lexer::Lexer;
use monkey_lang::parser::Parser;
use monkey_lang::parser::test_helper::*;

fn parse_single_expression(input: &str) -> Expression {
    let l = Lexer::new(input.to_string());
    let mut p = Parser::new(l);
    let program = p.parse_program();
    check_parser_errors(&p);
    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Statement::Expression(expr_stmt) => expr_stmt.value.clone(),
        other => panic!("stmt is not an ExpressionStatement. got={:?}", other),
    }
}

#[test]
fn test_parsing_identifier_expression() {
    let expr = parse_single_expression("foobar;");
    test_identifier(&expr, "foobar");
}

#[test]
fn test_parsing_integer_literal_expression() {
    let expr = parse_single_expression("5;");
    test_integer_literal(&expr, 5);
}

#[test]
fn test_parsing_string_literal_expression() {
    let expr = parse_single_expression(r#""hello world";"#);
    match &expr {
        Expression::StringLiteral(lit) => assert_eq!(lit.value, "hello world"),
        other => panic!("expr not StringLiteral. got={:?}", other),
    }
}

#[test]
fn test_parsing_boolean_literals() {
    test_boolean_literal(&parse_single_expression("true;"), true);
    test_boolean_literal(&parse_single_expression("false;"), false);
}

#[test]
fn test_parsing_prefix_expressions() {
    let tests: Vec<(&str, &str, i64)> = vec![("!5;", "!", 5), ("-15;", "-", 15)];
    for (input, operator, value) in tests {
        let expr = parse_single_expression(input);
        let prefix = match &expr {
            Expression::PrefixExpression(p) => p,
            other => panic!("expr not PrefixExpression. got={:?}", other),
        };
        assert_eq!(prefix.operator, operator);
        test_integer_literal(&prefix.right, value);
    }
}

#[test]
fn test_parsing_infix_expressions() {
    let tests: Vec<(&str, i64, &str, i64)> = vec![
        ("5 + 5;", 5, "+", 5),
        ("5 - 5;", 5, "-", 5),
        ("5 * 5;", 5, "*", 5),
        ("5 / 5;", 5, "/", 5),
        ("5 > 5;", 5, ">", 5),
        ("5 < 5;", 5, "<", 5),
        ("5 == 5;", 5, "==", 5),
        ("5 != 5;", 5, "!=", 5),
    ];
    for (input, left, operator, right) in tests {
        let expr = parse_single_expression(input);
        test_infix_expression(&expr, left, operator, right);
    }
}

#[test]
fn test_parsing_array_literals() {
    let expr = parse_single_expression("[1, 2 * 2, 3 + 3]");
    let array = match &expr {
        Expression::ArrayLiteral(a) => a,
        other => panic!("expr not ArrayLiteral. got={:?}", other),
    };
    assert_eq!(array.elements.len(), 3);
    test_integer_literal(&array.elements[0], 1);
    test_infix_expression(&array.elements[1], 2, "*", 2);
    test_infix_expression(&array.elements[2], 3, "+", 3);
}

#[test]
fn test_parsing_index_expressions() {
    let expr = parse_single_expression("myArray[1 + 1]");
    let index_expr = match &expr {
        Expression::IndexExpression(i) => i,
        other => panic!("expr not IndexExpression. got={:?}", other),
    };
    test_identifier(&index_expr.left, "myArray");
    test_infix_expression(&index_expr.index, 1, "+", 1);
}

#[test]
fn test_parsing_if_expression() {
    let expr = parse_single_expression("if (x < y) { x }");
    let if_expr = match &expr {
        Expression::IfExpression(e) => e,
        other => panic!("expr not IfExpression. got={:?}", other),
    };
    test_infix_expression(&if_expr.condition, "x", "<", "y");
    assert_eq!(if_expr.consequence.statements.len(), 1);
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_parsing_function_literal() {
    let expr = parse_single_expression("fn(x, y) { x + y; }");
    let func = match &expr {
        Expression::FunctionLiteral(f) => f,
        other => panic!("expr not FunctionLiteral. got={:?}", other),
    };
    assert_eq!(func.parameters.len(), 2);
    assert_eq!(func.parameters[0].value, "x");
    assert_eq!(func.parameters[1].value, "y");
    assert_eq!(func.body.statements.len(), 1);
}

#[test]
fn test_parsing_call_expression() {
    let expr = parse_single_expression("add(1, 2 * 3, 4 + 5);");
    let call = match &expr {
        Expression::CallExpression(c) => c,
        other => panic!("expr not CallExpression. got={:?}", other),
    };
    test_identifier(&call.function, "add");
    assert_eq!(call.arguments.len(), 3);
    test_integer_literal(&call.arguments[0], 1);
    test_infix_expression(&call.arguments[1], 2, "*", 3);
    test_infix_expression(&call.arguments[2], 4, "+", 5);
}
