//! Front end for the teaching language
//!
//! This module turns source text into a checked syntax tree in two strictly
//! sequential phases:
//! - [`lexer`]: tokenization (source text → [`TokenStream`])
//! - [`parse`]: parsing with inline semantic checks (tokens → [`Program`])
//!
//! Supporting modules:
//! - [`token`]: token model and numeric literal shapes
//! - [`vocabulary`]: keyword/operator/delimiter tables owned by each lexer
//! - [`stream`]: located character stream with one character of pushback
//! - [`symbols`]: the program-wide symbol table
//! - [`ast`]: syntax tree definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with a precedence ladder for binary
//! operators. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod stream;
pub mod symbols;
pub mod token;
pub mod vocabulary;

mod declarations;
mod expressions;
mod statements;

pub use ast::Program;
pub use lexer::{LexError, LexErrorKind, Lexer};
pub use parse::{Expected, Found, ParseError, ParseErrorKind, Parser};
pub use symbols::SymbolTable;
pub use token::{NumberShape, SourceLocation, Token, TokenKind, TokenStream};
pub use vocabulary::Vocabulary;
