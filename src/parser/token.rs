//! Token model shared by the lexer and the parser
//!
//! A [`Token`] is a classified lexeme plus the location of its first
//! character. The lexer produces a [`TokenStream`]; the parser walks it with a
//! forward-only cursor.

use std::fmt;
use std::ops::Deref;

/// Source location information for error reporting
///
/// Both fields are 1-indexed and counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The five token classes of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Operator,
    Delimiter,
    Identifier,
    Number,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
        };
        f.pad(name)
    }
}

/// A classified lexeme. Immutable once the lexer has produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Location of the first character of the lexeme.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// True when both the class and the exact lexeme match.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)
    }
}

/// Ordered, immutable token sequence produced by one lexer run.
///
/// Besides the tokens it remembers where the input ended, so that the parser
/// can point at the end of input when the program is cut short.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    end: SourceLocation,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, end: SourceLocation) -> Self {
        Self { tokens, end }
    }

    /// Location just past the last character of the input.
    pub fn end_location(&self) -> SourceLocation {
        self.end
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// The six accepted numeric literal shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberShape {
    /// `\d+` with an optional `d` suffix
    Integer,
    /// `\d*\.\d+` with an optional `e[-+]?\d+` exponent
    Real,
    /// `\d+e[-+]?\d+`
    Exponent,
    /// `[01]+b`
    Binary,
    /// `[0-7]+o`
    Octal,
    /// `[0-9a-fA-F]+h`
    Hexadecimal,
}

impl NumberShape {
    /// Classify a finished number lexeme. Shapes are tried in declaration
    /// order and the first match wins, so `101b` is binary and `101` is an
    /// integer.
    pub fn classify(lexeme: &str) -> Option<Self> {
        if is_integer(lexeme) {
            Some(NumberShape::Integer)
        } else if is_real(lexeme) {
            Some(NumberShape::Real)
        } else if is_exponent(lexeme) {
            Some(NumberShape::Exponent)
        } else if radix_digits(lexeme, 'b', |c| matches!(c, '0' | '1')) {
            Some(NumberShape::Binary)
        } else if radix_digits(lexeme, 'o', |c| matches!(c, '0'..='7')) {
            Some(NumberShape::Octal)
        } else if radix_digits(lexeme, 'h', |c| c.is_ascii_hexdigit()) {
            Some(NumberShape::Hexadecimal)
        } else {
            None
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn signed_digits(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    all_digits(unsigned)
}

fn is_integer(s: &str) -> bool {
    all_digits(s.strip_suffix('d').unwrap_or(s))
}

fn is_real(s: &str) -> bool {
    let Some((whole, rest)) = s.split_once('.') else {
        return false;
    };
    if !whole.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match rest.split_once('e') {
        Some((fraction, exponent)) => all_digits(fraction) && signed_digits(exponent),
        None => all_digits(rest),
    }
}

fn is_exponent(s: &str) -> bool {
    match s.split_once('e') {
        Some((mantissa, exponent)) => all_digits(mantissa) && signed_digits(exponent),
        None => false,
    }
}

fn radix_digits(s: &str, suffix: char, digit: impl Fn(char) -> bool) -> bool {
    match s.strip_suffix(suffix) {
        Some(body) => !body.is_empty() && body.chars().all(digit),
        None => false,
    }
}
