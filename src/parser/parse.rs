//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: the `var` section and type names
//! - `statements`: statement forms (assignment, if, for, while, read, write, compound)
//! - `expressions`: the four-level precedence ladder and factors
//!
//! # Semantic checks
//!
//! Declared names go into a [`SymbolTable`] while the `var` section is
//! parsed. Every later identifier use is looked up in that table on the spot;
//! there is no separate analysis pass. The first error of any kind ends the
//! parse.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::parser::ast::Program;
use crate::parser::symbols::SymbolTable;
use crate::parser::token::{SourceLocation, Token, TokenKind, TokenStream};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// One exact token
    Token(TokenKind, &'static str),
    /// Any of several exact tokens
    AnyOf(&'static [(TokenKind, &'static str)]),
    /// Any token of a kind, e.g. an identifier
    Kind(TokenKind),
    Type,
    Statement,
    Factor,
}

impl Expected {
    /// The expected token kind, when the expectation pins down a single one.
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Expected::Token(kind, _) | Expected::Kind(kind) => Some(*kind),
            Expected::AnyOf(alternatives) => {
                let (first, _) = alternatives.first()?;
                alternatives
                    .iter()
                    .all(|(kind, _)| kind == first)
                    .then_some(*first)
            }
            Expected::Type => Some(TokenKind::Keyword),
            Expected::Statement | Expected::Factor => None,
        }
    }

    /// The expected lexeme, when exactly one would do.
    pub fn lexeme(&self) -> Option<&'static str> {
        match self {
            Expected::Token(_, lexeme) => Some(*lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind, lexeme) => write!(f, "{kind} '{lexeme}'"),
            Expected::AnyOf(alternatives) => {
                for (i, (kind, lexeme)) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{kind} '{lexeme}'")?;
                }
                Ok(())
            }
            Expected::Kind(kind) => write!(f, "{kind}"),
            Expected::Type => write!(f, "type 'int', 'float' or 'bool'"),
            Expected::Statement => write!(f, "statement"),
            Expected::Factor => write!(f, "factor"),
        }
    }
}

/// What the parser actually saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token { kind: TokenKind, lexeme: String },
    EndOfInput,
}

impl From<&Token> for Found {
    fn from(token: &Token) -> Self {
        Found::Token {
            kind: token.kind(),
            lexeme: token.lexeme().to_string(),
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { kind, lexeme } => write!(f, "{kind} '{lexeme}'"),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Syntactic and semantic failures share one channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: Found },

    #[error("variable '{name}' is already declared (first declared at {previous})")]
    DuplicateDeclaration {
        name: String,
        previous: SourceLocation,
    },

    #[error("undeclared variable '{0}'")]
    UndeclaredVariable(String),

    #[error("nesting exceeds {} levels at {found}", MAX_NESTING)]
    NestingTooDeep { found: Found },
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at {location}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The token the error is about, or [`Found::EndOfInput`].
    ///
    /// Semantic errors are always about an identifier.
    pub fn found(&self) -> Found {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, .. }
            | ParseErrorKind::NestingTooDeep { found } => found.clone(),
            ParseErrorKind::DuplicateDeclaration { name, .. }
            | ParseErrorKind::UndeclaredVariable(name) => Found::Token {
                kind: TokenKind::Identifier,
                lexeme: name.clone(),
            },
        }
    }

    pub fn expected(&self) -> Option<&Expected> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => Some(expected),
            _ => None,
        }
    }
}

/// Deepest combined nesting of statements, `~` and parentheses.
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser over a lexed [`TokenStream`]
pub struct Parser<'t> {
    pub(crate) tokens: &'t TokenStream,
    pub(crate) position: usize,
    pub(crate) symbols: SymbolTable,
    pub(crate) depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t TokenStream) -> Self {
        Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
            depth: 0,
        }
    }

    /// Parse the entire program
    ///
    /// `program var Decl+ begin Stmts end .` — tokens after the final `.` are
    /// not examined. Each call starts from a fresh cursor and symbol table.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.position = 0;
        self.symbols = SymbolTable::new();
        self.depth = 0;
        debug!(tokens = self.tokens.len(), "parsing started");

        self.expect_keyword("program")?;
        self.expect_keyword("var")?;
        let declarations = self.parse_declarations()?;

        self.expect_keyword("begin")?;
        let body = self.parse_body()?;
        self.expect_keyword("end")?;
        self.expect_delimiter(".")?;

        debug!(
            variables = self.symbols.len(),
            statements = body.len(),
            "parsing finished"
        );
        Ok(Program { declarations, body })
    }

    /// Names declared by the most recent parse.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&'t Token> {
        let tokens: &'t TokenStream = self.tokens;
        tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn check(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.peek().is_some_and(|token| token.is(kind, lexeme))
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.check(kind, lexeme) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Location of the current token, or the end of input.
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek()
            .map_or_else(|| self.tokens.end_location(), Token::location)
    }

    /// Step one level deeper into a recursive construct.
    ///
    /// Every successful call must be paired with [`Parser::leave_nested`].
    pub(crate) fn enter_nested(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError {
                kind: ParseErrorKind::NestingTooDeep {
                    found: self.peek().map_or(Found::EndOfInput, Found::from),
                },
                location: self.current_location(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn unexpected(&self, expected: Expected) -> ParseError {
        let found = self.peek().map_or(Found::EndOfInput, Found::from);
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        lexeme: &'static str,
    ) -> Result<&'t Token, ParseError> {
        match self.peek() {
            Some(token) if token.is(kind, lexeme) => {
                self.position += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(Expected::Token(kind, lexeme))),
        }
    }

    pub(crate) fn expect_keyword(
        &mut self,
        keyword: &'static str,
    ) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::Keyword, keyword)
    }

    pub(crate) fn expect_delimiter(
        &mut self,
        delimiter: &'static str,
    ) -> Result<&'t Token, ParseError> {
        self.expect_token(TokenKind::Delimiter, delimiter)
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<&'t Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind() == TokenKind::Identifier => {
                self.position += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(Expected::Kind(TokenKind::Identifier))),
        }
    }

    /// Expect an identifier that names a declared variable.
    pub(crate) fn expect_declared(&mut self) -> Result<&'t Token, ParseError> {
        let location = self.current_location();
        let token = self.expect_identifier()?;
        if !self.symbols.contains(token.lexeme()) {
            return Err(ParseError {
                kind: ParseErrorKind::UndeclaredVariable(token.lexeme().to_string()),
                location,
            });
        }
        Ok(token)
    }

    /// Enter a freshly declared name into the symbol table.
    pub(crate) fn declare(&mut self, token: &Token) -> Result<(), ParseError> {
        trace!(name = token.lexeme(), line = token.line(), "declare");
        self.symbols
            .declare(token.lexeme(), token.location())
            .map_err(|previous| ParseError {
                kind: ParseErrorKind::DuplicateDeclaration {
                    name: token.lexeme().to_string(),
                    previous,
                },
                location: token.location(),
            })
    }
}
