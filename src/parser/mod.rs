//! Parser for the Monkey language, producing an Abstract Syntax Tree (AST).
//!
//! Parsing approach:
//! - Maintains a two-token lookahead (`curr_token`, `peek_token`).
//! - Provides helpers like `expect_peek`, `is_curr_token`, and `is_peek_token`.
//! - Prefix/infix parse functions are looked up in a dispatch table keyed by
//!   token kind (a Pratt parser), registered once at construction.
//! - Reports errors via the `errors` vector; parsing is best-effort and
//!   continues past a failed statement rather than aborting.

pub mod error;
mod precedence;
pub mod test_helper;

use crate::ast::{
    Program,
    expression::{
        ArrayLiteral, BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier,
        IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
        StringLiteral,
    },
    statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement},
};
use crate::lexer::{
    Lexer,
    token::{Token, TokenType},
};
use error::ParserError;
use precedence::Precedence;
use std::collections::HashMap;

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// A parser that converts tokens from a lexer into an Abstract Syntax Tree (AST).
pub struct Parser {
    l: Lexer,
    curr_token: Token,
    peek_token: Token,
    pub errors: Vec<ParserError>,
    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

impl Parser {
    /// Creates a new parser instance with the given lexer.
    ///
    /// Initializes the parser with empty tokens and then reads the first two
    /// tokens to set up the lookahead buffer.
    pub fn new(l: Lexer) -> Self {
        let mut p = Parser {
            l,
            curr_token: Token::new(TokenType::EOF, "".to_string(), 0, 0),
            peek_token: Token::new(TokenType::EOF, "".to_string(), 0, 0),
            errors: Vec::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };
        p.register_prefix_parse_fn(TokenType::IDENT, Parser::parse_identifier);
        p.register_prefix_parse_fn(TokenType::INT, Parser::parse_integer_literal);
        p.register_prefix_parse_fn(TokenType::STRING, Parser::parse_string_literal);
        p.register_prefix_parse_fn(TokenType::BANG, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::MINUS, Parser::parse_prefix_expression);
        p.register_prefix_parse_fn(TokenType::TRUE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::FALSE, Parser::parse_boolean_literal);
        p.register_prefix_parse_fn(TokenType::LPAREN, Parser::parse_grouped_expression);
        p.register_prefix_parse_fn(TokenType::IF, Parser::parse_if_expression);
        p.register_prefix_parse_fn(TokenType::FUNCTION, Parser::parse_function_literal);
        p.register_prefix_parse_fn(TokenType::LBRACKET, Parser::parse_array_literal);

        p.register_infix_parse_fn(TokenType::PLUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::MINUS, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::SLASH, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::ASTERISK, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::EQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::NOTEQ, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::GT, Parser::parse_infix_expression);
        p.register_infix_parse_fn(TokenType::LPAREN, Parser::parse_call_expression);
        p.register_infix_parse_fn(TokenType::LBRACKET, Parser::parse_index_expression);

        // Advance the token buffer to have a two-token lookahead
        p.next_token();
        p.next_token();
        p
    }

    /// Advances the token buffer by one position.
    fn next_token(&mut self) {
        self.curr_token = self.peek_token.clone();
        self.peek_token = self.l.next_token();
    }

    fn is_curr_token(&self, token_type: TokenType) -> bool {
        self.curr_token.token_type == token_type
    }

    fn is_peek_token(&self, token_type: TokenType) -> bool {
        self.peek_token.token_type == token_type
    }

    /// If the peek token matches `token_type`, advances and returns true;
    /// otherwise records an `ExpectedToken` error and returns false.
    fn expect_peek(&mut self, token_type: TokenType) -> bool {
        if self.is_peek_token(token_type) {
            self.next_token();
            true
        } else {
            let error = ParserError::expected_token(token_type, &self.peek_token);
            log::error!("{}", error);
            self.errors.push(error);
            false
        }
    }

    fn no_prefix_parse_function_error(&mut self) {
        let error = ParserError::no_prefix_fn(&self.curr_token);
        log::error!("{}", error);
        self.errors.push(error);
    }

    fn register_prefix_parse_fn(&mut self, token_type: TokenType, parse_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, parse_fn);
    }

    fn register_infix_parse_fn(&mut self, token_type: TokenType, parse_fn: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, parse_fn);
    }

    /// Returns a reference to the parser's error list.
    pub fn errors(&self) -> &Vec<ParserError> {
        &self.errors
    }

    /// Parses the entire program and returns the root AST node.
    ///
    /// Iterates until EOF, parsing one statement at a time. A failed
    /// statement is skipped (not pushed) but parsing continues with the
    /// next one rather than aborting.
    pub fn parse_program(&mut self) -> Program {
        log::debug!("starting to parse program");
        let mut program = Program {
            statements: Vec::new(),
        };
        while self.curr_token.token_type != TokenType::EOF {
            log::trace!(
                "[{}:{}] parsing statement, curr_token={:?}, peek_token={:?}",
                self.curr_token.line,
                self.curr_token.column,
                self.curr_token.token_type,
                self.peek_token.token_type
            );
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        log::debug!(
            "finished parsing program, {} statements parsed",
            program.statements.len()
        );
        program
    }

    /// Parses a single statement based on the current token type.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr_token.token_type {
            TokenType::LET => self.parse_let_statement().map(Statement::Let),
            TokenType::RETURN => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `let <identifier> = <expression>;` — the trailing semicolon is optional.
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::IDENT) {
            return None;
        }
        let name = Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        };

        if !self.expect_peek(TokenType::ASSIGN) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST as i32);

        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }

        Some(LetStatement { token, name, value })
    }

    /// `return <expression>;` — the trailing semicolon is optional.
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.curr_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST as i32);

        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }

        Some(ReturnStatement { token, value })
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.curr_token.literal.clone();
        Some(Expression::Identifier(Identifier { token, value }))
    }

    /// An expression followed by an optional trailing semicolon.
    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.curr_token.clone();
        let expr = self.parse_expression(Precedence::LOWEST as i32)?;
        let stmt = ExpressionStatement { token, value: expr };

        if self.is_peek_token(TokenType::SEMICOLON) {
            self.next_token();
        }
        Some(stmt)
    }

    /// The Pratt expression-parsing core: resolve a prefix parser for the
    /// current token, then repeatedly fold in infix parsers while the peek
    /// token binds tighter than `precedence`.
    fn parse_expression(&mut self, precedence: i32) -> Option<Expression> {
        let token_type = self.curr_token.token_type;
        let prefix = self.prefix_parse_fns.get(&token_type);
        let mut left = match prefix {
            Some(prefix_parse_fn) => prefix_parse_fn(self)?,
            None => {
                self.no_prefix_parse_function_error();
                return None;
            }
        };

        while !self.is_peek_token(TokenType::SEMICOLON) && precedence < self.peek_precedence() {
            let peek_token_type = self.peek_token.token_type;
            let infix = match self.infix_parse_fns.get(&peek_token_type).copied() {
                Some(infix) => infix,
                None => return Some(left),
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                let error = ParserError::invalid_integer(&token);
                log::error!("{}", error);
                self.errors.push(error);
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = token.literal.clone();
        Some(Expression::StringLiteral(StringLiteral { token, value }))
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let value = self.is_curr_token(TokenType::TRUE);
        Some(Expression::BooleanLiteral(BooleanLiteral { token, value }))
    }

    /// `!<right>` / `-<right>`, binding the right-hand side at PREFIX
    /// precedence so `-a + b` parses as `(-a) + b`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::PREFIX as i32)?;

        Some(Expression::PrefixExpression(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn peek_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.peek_token.token_type)
    }

    fn curr_precedence(&self) -> i32 {
        Precedence::from_token_type(&self.curr_token.token_type)
    }

    /// `<left> <operator> <right>`, binding the right-hand side at the
    /// operator's own precedence so same-precedence chains are left-assoc.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let operator = self.curr_token.literal.clone();
        let precedence = self.curr_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::InfixExpression(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::LOWEST as i32)?;
        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }
        Some(expr)
    }

    /// `if (<condition>) <consequence> else <alternative>`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();

        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::LOWEST as i32)?;

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.is_peek_token(TokenType::ELSE) {
            self.next_token();
            if !self.expect_peek(TokenType::LBRACE) {
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::IfExpression(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Expects the current token to be LBRACE; parses statements until RBRACE
    /// or EOF.
    fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.curr_token.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.is_curr_token(TokenType::RBRACE) && !self.is_curr_token(TokenType::EOF) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Some(BlockStatement { token, statements })
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        if !self.expect_peek(TokenType::LPAREN) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(TokenType::LBRACE) {
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Expects the current token to be LPAREN; parses a comma-separated
    /// identifier list until RPAREN.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.is_peek_token(TokenType::RPAREN) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(Identifier {
            token: self.curr_token.clone(),
            value: self.curr_token.literal.clone(),
        });

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            parameters.push(Identifier {
                token: self.curr_token.clone(),
                value: self.curr_token.literal.clone(),
            });
        }

        if !self.expect_peek(TokenType::RPAREN) {
            return None;
        }
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        let arguments = self.parse_expression_list(TokenType::RPAREN)?;
        Some(Expression::CallExpression(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.curr_token.clone();
        let elements = self.parse_expression_list(TokenType::RBRACKET)?;
        Some(Expression::ArrayLiteral(ArrayLiteral { token, elements }))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr_token.clone();
        self.next_token();
        let index = self.parse_expression(Precedence::LOWEST as i32)?;
        if !self.expect_peek(TokenType::RBRACKET) {
            return None;
        }
        Some(Expression::IndexExpression(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    /// Parses zero or more comma-separated expressions at LOWEST precedence,
    /// terminated by `end`. Shared by call arguments and array literals.
    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = Vec::new();
        if self.is_peek_token(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::LOWEST as i32)?);

        while self.is_peek_token(TokenType::COMMA) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::LOWEST as i32)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }
}
