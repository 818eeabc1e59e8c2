//! Expression parsing implementation
//!
//! Expressions are parsed with a four-level precedence ladder. Each binary
//! level is a loop that folds a left-associative chain of same-level
//! operators over the next level up:
//!
//! ```text
//! expr    ::= operand (("EQ" | "NE" | "LT" | "LE" | "GT" | "GE") operand)*
//! operand ::= term (("plus" | "min" | "or") term)*
//! term    ::= factor (("mult" | "div" | "and") factor)*
//! factor  ::= "~" factor | "(" expr ")" | ident | number | "true" | "false"
//! ```
//!
//! Types are not checked: `true plus 1.5` is a well-formed expression.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{BinOp, Expr};
use crate::parser::parse::{Expected, ParseError, Parser};
use crate::parser::token::{NumberShape, SourceLocation, TokenKind};

impl Parser<'_> {
    /// Parse expression (relational level, lowest precedence)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand()?;

        while let Some((op, location)) = self.match_operator(BinOp::relational) {
            let right = self.parse_operand()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    /// Parse operand (`plus`, `min`, `or`)
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some((op, location)) = self.match_operator(BinOp::additive) {
            let right = self.parse_term()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    /// Parse term (`mult`, `div`, `and`)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some((op, location)) = self.match_operator(BinOp::multiplicative) {
            let right = self.parse_factor()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    /// Parse factor: unary `~`, parenthesised expression, or an atom
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected(Expected::Factor));
        };
        let location = token.location();

        match token.kind() {
            TokenKind::Operator if token.lexeme() == "~" => {
                self.advance();
                self.enter_nested()?;
                let operand = self.parse_factor();
                self.leave_nested();
                Ok(Expr::Not {
                    operand: Box::new(operand?),
                    location,
                })
            }
            TokenKind::Delimiter if token.lexeme() == "(" => {
                self.advance();
                self.enter_nested()?;
                let expr = self.parse_expression();
                self.leave_nested();
                let expr = expr?;
                self.expect_delimiter(")")?;
                Ok(expr)
            }
            TokenKind::Identifier => {
                let name = self.expect_declared()?;
                Ok(Expr::Variable(name.lexeme().to_string(), location))
            }
            TokenKind::Number => {
                // Hand-built token streams may carry lexemes the lexer would reject
                let shape = NumberShape::classify(token.lexeme())
                    .ok_or_else(|| self.unexpected(Expected::Factor))?;
                self.advance();
                Ok(Expr::Number {
                    lexeme: token.lexeme().to_string(),
                    shape,
                    location,
                })
            }
            TokenKind::Keyword if matches!(token.lexeme(), "true" | "false") => {
                self.advance();
                Ok(Expr::Bool(token.lexeme() == "true", location))
            }
            _ => Err(self.unexpected(Expected::Factor)),
        }
    }

    /// Consume the current token if it is an operator of the level described
    /// by `classify`.
    fn match_operator(
        &mut self,
        classify: fn(&str) -> Option<BinOp>,
    ) -> Option<(BinOp, SourceLocation)> {
        let token = self.peek().filter(|t| t.kind() == TokenKind::Operator)?;
        let op = classify(token.lexeme())?;
        self.advance();
        Some((op, token.location()))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{Expr, Statement};
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::Parser;

    /// Parse `source` as the value of a single assignment and render it.
    fn expr(source: &str) -> String {
        let program = format!("program var a, b, c, d: int; begin a as {source} end.");
        let tokens = Lexer::new(&program).tokenize().unwrap();
        let parsed = Parser::new(&tokens).parse_program().unwrap();
        match &parsed.body[0] {
            Statement::Assign(assignment) => assignment.value.to_string(),
            other => panic!("Expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_precedence_ladder() {
        assert_eq!(expr("a plus b mult c"), "(a plus (b mult c))");
        assert_eq!(expr("a mult b plus c"), "((a mult b) plus c)");
        assert_eq!(expr("a plus b LT c mult d"), "((a plus b) LT (c mult d))");
        assert_eq!(expr("a or b and c"), "(a or (b and c))");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(expr("a min b min c"), "((a min b) min c)");
        assert_eq!(expr("a div b mult c"), "((a div b) mult c)");
        assert_eq!(expr("a EQ b NE c"), "((a EQ b) NE c)");
    }

    #[test]
    fn test_unary_and_parentheses() {
        assert_eq!(expr("~a plus b"), "(~a plus b)");
        assert_eq!(expr("~~a"), "~~a");
        assert_eq!(expr("~(a plus b)"), "~(a plus b)");
        assert_eq!(expr("(a plus b) mult c"), "((a plus b) mult c)");
    }

    #[test]
    fn test_atoms() {
        assert_eq!(expr("true and false"), "(true and false)");
        assert_eq!(expr("1.5e3 plus 0FFh"), "(1.5e3 plus 0FFh)");
    }

    #[test]
    fn test_binary_location_is_operator() {
        let tokens = Lexer::new("program var a: int; begin a as a plus 1 end.")
            .tokenize()
            .unwrap();
        let program = Parser::new(&tokens).parse_program().unwrap();
        let Statement::Assign(assignment) = &program.body[0] else {
            panic!("Expected assignment");
        };
        assert!(matches!(assignment.value, Expr::Binary { .. }));
        assert_eq!(assignment.value.location().column, 34);
    }
}
