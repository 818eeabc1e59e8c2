//! Closed word lists that drive token classification
//!
//! Each [`Lexer`](super::lexer::Lexer) owns its own [`Vocabulary`]; nothing
//! here is global. The default vocabulary is the teaching language itself,
//! and [`Vocabulary::new`] builds a custom one from explicit lists.

use rustc_hash::FxHashSet;

const KEYWORDS: &[&str] = &[
    "not", "program", "var", "begin", "end", "int", "float", "bool", "as", "if", "else", "then",
    "for", "to", "do", "while", "read", "write", "true", "false",
];

const OPERATORS: &[&str] = &[
    "NE", "EQ", "LT", "LE", "GT", "GE", "plus", "min", "or", "mult", "div", "and", "~",
];

const DELIMITERS: &[char] = &[';', ':', ',', '(', ')', '.', '=', '{', '}', '[', ']'];

const COMMENT_OPEN: char = '{';
const COMMENT_CLOSE: char = '}';

/// Immutable classification tables for one lexer instance.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: FxHashSet<String>,
    word_operators: FxHashSet<String>,
    symbol_operators: FxHashSet<String>,
    delimiters: FxHashSet<char>,
    comment: Option<(char, char)>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit lists.
    ///
    /// Operators whose first character is a letter are word operators and are
    /// recognised after an identifier-shaped lexeme is finished; all others
    /// are symbol operators and go through the longest-match path.
    pub fn new<'a>(
        keywords: impl IntoIterator<Item = &'a str>,
        operators: impl IntoIterator<Item = &'a str>,
        delimiters: impl IntoIterator<Item = char>,
    ) -> Self {
        let mut word_operators = FxHashSet::default();
        let mut symbol_operators = FxHashSet::default();
        for op in operators {
            if op.chars().next().is_some_and(char::is_alphabetic) {
                word_operators.insert(op.to_string());
            } else if !op.is_empty() {
                symbol_operators.insert(op.to_string());
            }
        }

        Self {
            keywords: keywords.into_iter().map(str::to_string).collect(),
            word_operators,
            symbol_operators,
            delimiters: delimiters.into_iter().collect(),
            comment: None,
        }
    }

    /// Treat `open` as the start of a comment running through `close`.
    ///
    /// `open` is expected to be one of the delimiters.
    pub fn with_comment(mut self, open: char, close: char) -> Self {
        self.comment = Some((open, close));
        self
    }

    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    pub fn is_word_operator(&self, lexeme: &str) -> bool {
        self.word_operators.contains(lexeme)
    }

    /// Any operator, word-shaped or symbolic.
    pub fn is_operator(&self, lexeme: &str) -> bool {
        self.symbol_operators.contains(lexeme) || self.word_operators.contains(lexeme)
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    /// True when some symbol operator begins with `ch`.
    pub fn starts_symbol_operator(&self, ch: char) -> bool {
        self.symbol_operators
            .iter()
            .any(|op| op.chars().next() == Some(ch))
    }

    /// Comment-open and comment-close characters, if comments are enabled.
    pub fn comment(&self) -> Option<(char, char)> {
        self.comment
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::new(
            KEYWORDS.iter().copied(),
            OPERATORS.iter().copied(),
            DELIMITERS.iter().copied(),
        )
        .with_comment(COMMENT_OPEN, COMMENT_CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let vocab = Vocabulary::default();

        assert!(vocab.is_keyword("program"));
        assert!(vocab.is_keyword("true"));
        assert!(!vocab.is_keyword("or"));

        assert!(vocab.is_word_operator("or"));
        assert!(vocab.is_word_operator("LE"));
        assert!(!vocab.is_word_operator("~"));
        assert!(vocab.is_operator("~"));

        assert!(vocab.is_delimiter('['));
        assert!(!vocab.is_delimiter('~'));
        assert!(vocab.starts_symbol_operator('~'));
        assert!(!vocab.starts_symbol_operator('L'));
        assert_eq!(vocab.comment(), Some(('{', '}')));
    }

    #[test]
    fn test_custom_operators_split() {
        let vocab = Vocabulary::new(["if"], ["<", "<=", "xor"], [';']);

        assert!(vocab.is_word_operator("xor"));
        assert!(vocab.is_operator("<="));
        assert!(vocab.starts_symbol_operator('<'));
        assert!(!vocab.starts_symbol_operator('='));
        assert_eq!(vocab.comment(), None);
    }
}
