//! Located character stream with one character of pushback

use std::str::Chars;

use super::token::SourceLocation;

/// A character together with the location it was read from.
pub type Located = (char, SourceLocation);

/// Character source for the lexer.
///
/// Locations are computed as characters are pulled from the underlying
/// input, so a character that is pushed back keeps the location it was first
/// read at. Only one character can be pushed back at a time.
pub struct CharStream<'a> {
    chars: Chars<'a>,
    peeked: Option<Located>,
    line: usize,
    column: usize,
}

impl<'a> CharStream<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            peeked: None,
            line: 1,
            column: 1,
        }
    }

    /// Read the next character, serving a pushed-back one first.
    pub fn next_char(&mut self) -> Option<Located> {
        if let Some(located) = self.peeked.take() {
            return Some(located);
        }

        let ch = self.chars.next()?;
        let location = SourceLocation::new(self.line, self.column);
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some((ch, location))
    }

    /// Return a character so the next read yields it again.
    ///
    /// Passing `None` (the result of reading at end of stream) is a no-op.
    pub fn push_back(&mut self, located: Option<Located>) {
        debug_assert!(
            self.peeked.is_none(),
            "only one character of pushback is supported"
        );
        if located.is_some() {
            self.peeked = located;
        }
    }

    /// Location of the next character to be read, or just past the end.
    pub fn location(&self) -> SourceLocation {
        match self.peeked {
            Some((_, location)) => location,
            None => SourceLocation::new(self.line, self.column),
        }
    }
}

impl Iterator for CharStream<'_> {
    type Item = Located;

    fn next(&mut self) -> Option<Located> {
        self.next_char()
    }
}
