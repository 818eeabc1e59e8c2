//! Statement parsing implementation
//!
//! This module handles parsing of all statement types:
//!
//! - Assignment: `x as expr`
//! - Control flow: `if`, `for`, `while`
//! - I/O: `read(...)`, `write(...)`
//! - Compound statements: `[ ... ]`
//!
//! # Grammar
//!
//! ```text
//! stmts     ::= stmt (";" stmt)*
//! stmt      ::= if | for | while | read | write | compound | assign
//! compound  ::= "[" stmt ((":" | ";") stmt)* "]"
//! assign    ::= ident "as" expr
//! if        ::= "if" expr "then" stmt ("else" stmt)?
//! for       ::= "for" assign "to" expr "do" stmt
//! while     ::= "while" expr "do" stmt
//! read      ::= "read" "(" ident ("," ident)* ")"
//! write     ::= "write" "(" expr ("," expr)* ")"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use tracing::trace;

use crate::parser::ast::{Assignment, Statement};
use crate::parser::parse::{Expected, ParseError, Parser};
use crate::parser::token::TokenKind;

const LIST_SEPARATORS: &[(TokenKind, &str)] =
    &[(TokenKind::Delimiter, ","), (TokenKind::Delimiter, ")")];

impl Parser<'_> {
    /// Parse the program body between `begin` and `end`.
    ///
    /// The list stops in front of `end`, so an empty body and a `;` right
    /// before `end` are both accepted.
    pub(crate) fn parse_body(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::Keyword, "end") {
            let statement = self.parse_statement()?;
            trace!(line = statement.location().line, "statement");
            statements.push(statement);

            if self.match_token(TokenKind::Delimiter, ";") {
                continue;
            }
            if self.check(TokenKind::Keyword, "end") {
                break;
            }
            return Err(self.unexpected(Expected::AnyOf(&[
                (TokenKind::Delimiter, ";"),
                (TokenKind::Keyword, "end"),
            ])));
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.enter_nested()?;
        let statement = self.parse_statement_kind();
        self.leave_nested();
        statement
    }

    fn parse_statement_kind(&mut self) -> Result<Statement, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected(Expected::Statement));
        };

        match (token.kind(), token.lexeme()) {
            (TokenKind::Keyword, "if") => self.parse_if_statement(),
            (TokenKind::Keyword, "for") => self.parse_for_statement(),
            (TokenKind::Keyword, "while") => self.parse_while_statement(),
            (TokenKind::Keyword, "read") => self.parse_read_statement(),
            (TokenKind::Keyword, "write") => self.parse_write_statement(),
            (TokenKind::Delimiter, "[") => self.parse_compound_statement(),
            (TokenKind::Identifier, _) => Ok(Statement::Assign(self.parse_assignment()?)),
            _ => Err(self.unexpected(Expected::Statement)),
        }
    }

    /// Parse compound statement: `[ stmt ((":" | ";") stmt)* ]`
    fn parse_compound_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.expect_delimiter("[")?.location();
        let mut statements = Vec::new();

        loop {
            statements.push(self.parse_statement()?);

            if self.match_token(TokenKind::Delimiter, ":")
                || self.match_token(TokenKind::Delimiter, ";")
            {
                continue;
            }
            if self.match_token(TokenKind::Delimiter, "]") {
                break;
            }
            return Err(self.unexpected(Expected::AnyOf(&[
                (TokenKind::Delimiter, ":"),
                (TokenKind::Delimiter, ";"),
                (TokenKind::Delimiter, "]"),
            ])));
        }

        Ok(Statement::Compound {
            statements,
            location,
        })
    }

    /// Parse assignment: `ident as expr`. The target must be declared.
    pub(crate) fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let target = self.expect_declared()?;
        self.expect_keyword("as")?;
        let value = self.parse_expression()?;

        Ok(Assignment {
            target: target.lexeme().to_string(),
            value,
            location: target.location(),
        })
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.expect_keyword("if")?.location();

        let condition = self.parse_expression()?;
        self.expect_keyword("then")?;
        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.match_token(TokenKind::Keyword, "else") {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
            location,
        })
    }

    /// Parse for statement: `for assign to expr do stmt`
    fn parse_for_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.expect_keyword("for")?.location();

        let init = self.parse_assignment()?;
        self.expect_keyword("to")?;
        let limit = self.parse_expression()?;
        self.expect_keyword("do")?;
        let body = Box::new(self.parse_statement()?);

        Ok(Statement::For {
            init,
            limit,
            body,
            location,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.expect_keyword("while")?.location();

        let condition = self.parse_expression()?;
        self.expect_keyword("do")?;
        let body = Box::new(self.parse_statement()?);

        Ok(Statement::While {
            condition,
            body,
            location,
        })
    }

    /// Parse read statement. Every name in the list must be declared.
    fn parse_read_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.expect_keyword("read")?.location();
        self.expect_delimiter("(")?;

        let mut targets = Vec::new();
        loop {
            let target = self.expect_declared()?;
            targets.push(target.lexeme().to_string());

            if self.match_token(TokenKind::Delimiter, ",") {
                continue;
            }
            if self.match_token(TokenKind::Delimiter, ")") {
                break;
            }
            return Err(self.unexpected(Expected::AnyOf(LIST_SEPARATORS)));
        }

        Ok(Statement::Read { targets, location })
    }

    /// Parse write statement
    fn parse_write_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.expect_keyword("write")?.location();
        self.expect_delimiter("(")?;

        let mut values = Vec::new();
        loop {
            values.push(self.parse_expression()?);

            if self.match_token(TokenKind::Delimiter, ",") {
                continue;
            }
            if self.match_token(TokenKind::Delimiter, ")") {
                break;
            }
            return Err(self.unexpected(Expected::AnyOf(LIST_SEPARATORS)));
        }

        Ok(Statement::Write { values, location })
    }
}
