//! Declaration parsing implementation
//!
//! This module handles the `var` section of a program:
//!
//! - Variable lists: `a, b, c : int ;`
//! - Type names: `int`, `float`, `bool`
//!
//! # Grammar
//!
//! ```text
//! decl ::= ident ("," ident)* ":" type ";"
//! type ::= "int" | "float" | "bool"
//! ```
//!
//! Every name is entered into the symbol table as soon as it is read, so a
//! repeat within the same list is caught too.

use tracing::trace;

use crate::parser::ast::{Declaration, Type};
use crate::parser::parse::{Expected, ParseError, Parser};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse one or more declarations, up to (not including) `begin`.
    pub(crate) fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        loop {
            declarations.push(self.parse_declaration()?);
            if self.check(TokenKind::Keyword, "begin") {
                break;
            }
        }

        Ok(declarations)
    }

    /// Parse a single declaration: `ident ("," ident)* ":" type ";"`
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let location = self.current_location();
        let mut names = Vec::new();

        loop {
            let name = self.expect_identifier()?;
            self.declare(name)?;
            names.push(name.lexeme().to_string());

            if self.match_token(TokenKind::Delimiter, ",") {
                continue;
            }
            if self.match_token(TokenKind::Delimiter, ":") {
                break;
            }
            return Err(self.unexpected(Expected::AnyOf(&[
                (TokenKind::Delimiter, ","),
                (TokenKind::Delimiter, ":"),
            ])));
        }

        let ty = self.parse_type()?;
        self.expect_delimiter(";")?;
        trace!(?names, %ty, "declaration");

        Ok(Declaration {
            names,
            ty,
            location,
        })
    }

    /// Parse type: `int` | `float` | `bool`
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let ty = self
            .peek()
            .filter(|token| token.kind() == TokenKind::Keyword)
            .and_then(|token| Type::from_keyword(token.lexeme()))
            .ok_or_else(|| self.unexpected(Expected::Type))?;
        self.position += 1;
        Ok(ty)
    }
}
