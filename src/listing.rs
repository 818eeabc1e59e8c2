//! Human-readable token listing and result lines for the command-line front end
//!
//! Styling goes through crossterm so the same text can be written plain (for
//! pipes and tests) or coloured (for terminals).

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::parser::{Program, Token, TokenKind, TokenStream};

pub struct Theme {
    pub keyword: Color,
    pub operator: Color,
    pub delimiter: Color,
    pub identifier: Color,
    pub number: Color,
    pub success: Color, // Green
    pub error: Color,   // Red
}

pub const DEFAULT_THEME: Theme = Theme {
    keyword: Color::Rgb { r: 137, g: 180, b: 250 },    // Blue
    operator: Color::Rgb { r: 249, g: 226, b: 175 },   // Yellow
    delimiter: Color::Rgb { r: 108, g: 112, b: 134 },  // Grey
    identifier: Color::Rgb { r: 205, g: 214, b: 244 }, // Foreground
    number: Color::Rgb { r: 250, g: 179, b: 135 },     // Orange
    success: Color::Rgb { r: 166, g: 227, b: 161 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
};

impl Theme {
    fn kind_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Operator => self.operator,
            TokenKind::Delimiter => self.delimiter,
            TokenKind::Identifier => self.identifier,
            TokenKind::Number => self.number,
        }
    }
}

/// One listing line, e.g.
/// `Token: Keyword         Lexeme: program    Line: 1 Col: 1`
pub fn format_token(token: &Token, theme: Option<&Theme>) -> String {
    let kind = format!("{:<15}", token.kind());
    let kind = match theme {
        Some(theme) => kind.with(theme.kind_color(token.kind())).to_string(),
        None => kind,
    };
    format!(
        "Token: {} Lexeme: {:<10} Line: {} Col: {}",
        kind,
        token.lexeme(),
        token.line(),
        token.column()
    )
}

/// Write one line per token.
pub fn write_listing<W: Write>(
    out: &mut W,
    tokens: &TokenStream,
    theme: Option<&Theme>,
) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", format_token(token, theme))?;
    }
    Ok(())
}

/// Closing line for a program that passed every check.
pub fn success_line(program: &Program, theme: Option<&Theme>) -> String {
    let line = format!(
        "Parsed successfully: {} declarations, {} statements.",
        program.declarations.len(),
        program.body.len()
    );
    match theme {
        Some(theme) => line.with(theme.success).to_string(),
        None => line,
    }
}

/// Closing line for the first error of either phase.
pub fn error_line(error: &dyn std::error::Error, theme: Option<&Theme>) -> String {
    let line = error.to_string();
    match theme {
        Some(theme) => line.with(theme.error).to_string(),
        None => line,
    }
}
