use env_logger::Builder;
use monkey_lang::evaluator;
use monkey_lang::lexer::Lexer;
use monkey_lang::object::Environment;
use monkey_lang::parser::Parser;
use monkey_lang::repl::repl;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logger (can be controlled via RUST_LOG environment variable)
    // Examples: RUST_LOG=debug, RUST_LOG=monkey_lang::parser=debug
    Builder::from_default_env().init();

    let path = std::env::args().nth(1);
    match path {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn run_repl() -> ExitCode {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match repl(stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Reads `path` as one source string, parses and evaluates it once against a
/// fresh environment, and prints the final value if it is non-null.
fn run_file(path: &str) -> ExitCode {
    let mut source = String::new();
    if let Err(err) = std::fs::File::open(path).and_then(|mut f| f.read_to_string(&mut source)) {
        eprintln!("could not read {}: {}", path, err);
        return ExitCode::FAILURE;
    }

    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprintln!("parser errors:");
        for error in parser.errors() {
            eprintln!("\t{}", error);
        }
        return ExitCode::FAILURE;
    }

    let env = Environment::new();
    let result = evaluator::eval_program(&program, &env);
    if !matches!(result, monkey_lang::object::Value::Null) {
        println!("{}", result);
    }
    ExitCode::SUCCESS
}
