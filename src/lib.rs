//! # Introduction
//!
//! eduparse checks programs written in a small imperative teaching language.
//! It tokenizes the source, validates the token stream against the grammar
//! with a recursive descent parser, and enforces two semantic rules on the
//! way: no variable is declared twice, and no variable is used before it is
//! declared.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → TokenStream → Parser (+ SymbolTable) → Program
//! ```
//!
//! 1. [`parser::lexer`] — state-machine lexer producing a located
//!    [`parser::TokenStream`] or a single [`parser::LexError`].
//! 2. [`parser::parse`] — recursive descent parser producing a
//!    [`parser::Program`] or a single [`parser::ParseError`].
//! 3. [`listing`] — token listing used by the command-line front end.
//!
//! The first error of either phase ends processing; there is no recovery.
//!
//! ## Language overview
//!
//! ```text
//! program var x, y: int; ok: bool;
//! begin
//!     read(x);
//!     for y as 1 to x do write(y mult y);
//!     ok as ~(x LT 0) and true
//! end.
//! ```
//!
//! Types: `int`, `float`, `bool` (declared, never checked).
//! Statements: assignment (`as`), `if/then/else`, `for/to/do`, `while/do`,
//! `read`, `write`, compound `[ ... ]`.
//! Operators: `EQ NE LT LE GT GE`, `plus min or`, `mult div and`, prefix `~`.
//! Comments: `{ ... }`.

use thiserror::Error;

pub mod listing;
pub mod parser;

use parser::{LexError, Lexer, ParseError, Parser, Program, TokenStream};

/// Either phase's error, for callers that run the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Tokenize `source`.
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    Lexer::new(source).tokenize()
}

/// Tokenize and parse `source`.
///
/// Lexing completes before parsing starts, so a lexical error means the
/// parser never runs.
pub fn analyze(source: &str) -> Result<Program, AnalysisError> {
    let tokens = tokenize(source)?;
    let program = Parser::new(&tokens).parse_program()?;
    Ok(program)
}
