//! Lexer (tokenizer) for the teaching language
//!
//! Converts raw source text into a [`TokenStream`] consumed by the parser.
//! The lexer is an explicit state machine over a [`CharStream`]:
//!
//! ```text
//!             letter                 non-alphanumeric (pushed back)
//!   Start ─────────────▶ InIdentifier ───────────────────────────▶ Start
//!     │  digit                       non-literal char (pushed back)
//!     ├────────────────▶ InNumber ───────────────────────────────▶ Start
//!     │  operator char               one lookahead char
//!     └────────────────▶ InOperatorCandidate ────────────────────▶ Start
//! ```
//!
//! Whitespace, delimiters and brace comments are handled without leaving
//! `Start`. Classification of finished lexemes is driven by the lexer's own
//! [`Vocabulary`].

use thiserror::Error;
use tracing::{debug, trace};

use super::stream::CharStream;
use super::token::{NumberShape, SourceLocation, Token, TokenKind, TokenStream};
use super::vocabulary::Vocabulary;

/// What went wrong while lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unknown character '{0}'")]
    UnknownCharacter(char),

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("unterminated comment: expected '{0}' before end of input")]
    UnterminatedComment(char),

    #[error("unrecognized operator '{0}'")]
    UnrecognizedOperator(String),
}

/// Lexer error type
///
/// The location is always the first character of the offending lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexer error at {location}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

impl LexError {
    fn new(kind: LexErrorKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Lexer states. Each state has exactly one transition function on
/// [`Lexer`], which receives the next character and returns the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    InIdentifier,
    InNumber,
    InOperatorCandidate,
}

/// Lexer for the teaching language
pub struct Lexer<'a> {
    vocabulary: Vocabulary,
    stream: CharStream<'a>,
    state: LexState,
    lexeme: String,
    lexeme_start: SourceLocation,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        Self::with_vocabulary(input, Vocabulary::default())
    }

    /// Create a lexer that classifies with a custom vocabulary.
    pub fn with_vocabulary(input: &'a str, vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            stream: CharStream::new(input),
            state: LexState::Start,
            lexeme: String::new(),
            lexeme_start: SourceLocation::default(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Result<TokenStream, LexError> {
        debug!("lexing started");

        while let Some((ch, location)) = self.stream.next_char() {
            self.state = match self.state {
                LexState::Start => self.on_start(ch, location)?,
                LexState::InIdentifier => self.on_identifier(ch, location),
                LexState::InNumber => self.on_number(ch, location)?,
                LexState::InOperatorCandidate => self.on_operator_candidate(ch, location)?,
            };
        }

        // End of input acts as a terminator for whatever is in progress
        match self.state {
            LexState::Start => {}
            LexState::InIdentifier => self.finish_word(),
            LexState::InNumber => self.finish_number()?,
            LexState::InOperatorCandidate => self.finish_operator()?,
        }

        debug!(tokens = self.tokens.len(), "lexing finished");
        Ok(TokenStream::new(self.tokens, self.stream.location()))
    }

    /// `Start`: skip whitespace, emit delimiters, skip comments, or begin
    /// accumulating an identifier, number, or operator.
    fn on_start(&mut self, ch: char, location: SourceLocation) -> Result<LexState, LexError> {
        if ch.is_whitespace() {
            return Ok(LexState::Start);
        }

        if ch.is_alphabetic() {
            self.begin_lexeme(ch, location);
            return Ok(LexState::InIdentifier);
        }

        if ch.is_ascii_digit() {
            self.begin_lexeme(ch, location);
            return Ok(LexState::InNumber);
        }

        if self.vocabulary.is_delimiter(ch) {
            match self.vocabulary.comment() {
                Some((open, close)) if open == ch => self.skip_comment(close, location)?,
                _ => self.emit(TokenKind::Delimiter, ch.to_string(), location),
            }
            return Ok(LexState::Start);
        }

        if self.vocabulary.starts_symbol_operator(ch) {
            self.begin_lexeme(ch, location);
            return Ok(LexState::InOperatorCandidate);
        }

        Err(LexError::new(LexErrorKind::UnknownCharacter(ch), location))
    }

    /// `InIdentifier`: letters and digits extend the lexeme; anything else
    /// finishes it and is re-lexed from `Start`.
    fn on_identifier(&mut self, ch: char, location: SourceLocation) -> LexState {
        if ch.is_alphanumeric() {
            self.lexeme.push(ch);
            return LexState::InIdentifier;
        }

        self.finish_word();
        self.stream.push_back(Some((ch, location)));
        LexState::Start
    }

    /// `InNumber`: literal characters extend the lexeme. A letter right after
    /// the literal makes the whole lexeme malformed; any other terminator
    /// finishes the number and is re-lexed from `Start`.
    fn on_number(&mut self, ch: char, location: SourceLocation) -> Result<LexState, LexError> {
        if is_number_char(ch) {
            self.lexeme.push(ch);
            return Ok(LexState::InNumber);
        }

        if ch.is_alphanumeric() {
            let mut lexeme = std::mem::take(&mut self.lexeme);
            lexeme.push(ch);
            return Err(LexError::new(
                LexErrorKind::MalformedNumber(lexeme),
                self.lexeme_start,
            ));
        }

        self.finish_number()?;
        self.stream.push_back(Some((ch, location)));
        Ok(LexState::Start)
    }

    /// `InOperatorCandidate`: one lookahead character decides between a
    /// two-character operator and a one-character one. Longest match wins.
    fn on_operator_candidate(
        &mut self,
        ch: char,
        location: SourceLocation,
    ) -> Result<LexState, LexError> {
        let mut candidate = self.lexeme.clone();
        candidate.push(ch);

        if self.vocabulary.is_operator(&candidate) {
            self.lexeme = candidate;
        } else {
            self.stream.push_back(Some((ch, location)));
        }

        self.finish_operator()?;
        Ok(LexState::Start)
    }

    /// Consume a comment through `close`. The opening character is at
    /// `open_location`, which is also where an unterminated comment is reported.
    fn skip_comment(&mut self, close: char, open_location: SourceLocation) -> Result<(), LexError> {
        loop {
            match self.stream.next_char() {
                Some((ch, _)) if ch == close => return Ok(()),
                Some(_) => {}
                None => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedComment(close),
                        open_location,
                    ))
                }
            }
        }
    }

    fn begin_lexeme(&mut self, ch: char, location: SourceLocation) {
        self.lexeme.clear();
        self.lexeme.push(ch);
        self.lexeme_start = location;
    }

    /// Classify a finished identifier-shaped lexeme.
    fn finish_word(&mut self) {
        let lexeme = std::mem::take(&mut self.lexeme);
        let kind = if self.vocabulary.is_keyword(&lexeme) {
            TokenKind::Keyword
        } else if self.vocabulary.is_word_operator(&lexeme) {
            TokenKind::Operator
        } else {
            TokenKind::Identifier
        };
        self.emit(kind, lexeme, self.lexeme_start);
    }

    fn finish_number(&mut self) -> Result<(), LexError> {
        let lexeme = std::mem::take(&mut self.lexeme);
        match NumberShape::classify(&lexeme) {
            Some(shape) => {
                trace!(?shape, %lexeme, "number literal");
                self.emit(TokenKind::Number, lexeme, self.lexeme_start);
                Ok(())
            }
            None => Err(LexError::new(
                LexErrorKind::MalformedNumber(lexeme),
                self.lexeme_start,
            )),
        }
    }

    fn finish_operator(&mut self) -> Result<(), LexError> {
        let lexeme = std::mem::take(&mut self.lexeme);
        if !self.vocabulary.is_operator(&lexeme) {
            return Err(LexError::new(
                LexErrorKind::UnrecognizedOperator(lexeme),
                self.lexeme_start,
            ));
        }
        self.emit(TokenKind::Operator, lexeme, self.lexeme_start);
        Ok(())
    }

    fn emit(&mut self, kind: TokenKind, lexeme: String, location: SourceLocation) {
        trace!(%kind, %lexeme, line = location.line, column = location.column, "token");
        self.tokens.push(Token::new(kind, lexeme, location));
    }
}

/// Characters that may continue a numeric literal once it has started.
fn is_number_char(ch: char) -> bool {
    ch.is_ascii_hexdigit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-' | 'b' | 'o' | 'h' | 'd')
}
