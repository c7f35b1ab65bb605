//! `monkey_lang`: lexer, parser, tree-walking evaluator, and REPL for the
//! Monkey programming language.

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
