//! Parser error types for the Monkey language.
//!
//! Errors are structured (kind + source span) rather than bare strings, but
//! their `Display` text matches the canonical messages the language defines,
//! so callers that only care about the text (the REPL, tests) can keep
//! treating them as strings via `to_string()`.

mod parser_error;
mod span;

pub use parser_error::{ParserError, ParserErrorKind};
pub use span::Span;
