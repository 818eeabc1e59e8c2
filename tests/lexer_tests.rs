// Integration tests for the lexer

use eduparse::parser::{LexErrorKind, Lexer, SourceLocation, TokenKind, Vocabulary};

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source)
        .tokenize()
        .expect("Lexing failed")
        .iter()
        .map(|t| (t.kind(), t.lexeme().to_string()))
        .collect()
}

#[test]
fn test_lexing_is_deterministic() {
    let source = "program var x: int; {c} begin x as 1.5e3 plus ~x end.";

    let first = Lexer::new(source).tokenize().expect("Lexing failed");
    let second = Lexer::new(source).tokenize().expect("Lexing failed");

    assert_eq!(first, second);
}

#[test]
fn test_each_number_shape_is_a_number() {
    let literals = [
        "42", "42d", "3.25", "6.02e23", "1.5e-3", "4e+2", "101b", "755o", "1Fh", "0ABCh",
    ];
    for literal in literals {
        let source = format!("x as {literal};");
        let tokens = Lexer::new(&source)
            .tokenize()
            .unwrap_or_else(|e| panic!("{literal}: {e}"));

        assert!(tokens[2].is(TokenKind::Number, literal), "{literal}");
        assert!(tokens[3].is(TokenKind::Delimiter, ";"), "{literal}");
    }
}

#[test]
fn test_leading_dot_is_a_delimiter() {
    assert_eq!(
        kinds(".5"),
        vec![
            (TokenKind::Delimiter, ".".to_string()),
            (TokenKind::Number, "5".to_string()),
        ]
    );
}

#[test]
fn test_letter_after_number_is_malformed() {
    let err = Lexer::new("12g").tokenize().unwrap_err();

    assert_eq!(err.kind, LexErrorKind::MalformedNumber("12g".to_string()));
    assert_eq!(err.location, SourceLocation::new(1, 1));
    assert_eq!(err.to_string(), "Lexer error at line 1, column 1: malformed number '12g'");
}

#[test]
fn test_number_shape_mismatch_is_malformed() {
    for literal in ["12b", "9o", "1e", "1.", "1E5", "12h5"] {
        let err = Lexer::new(&format!("x as {literal} ")).tokenize().unwrap_err();
        assert!(
            matches!(err.kind, LexErrorKind::MalformedNumber(_)),
            "{literal}: {err}"
        );
        assert_eq!(err.location, SourceLocation::new(1, 6), "{literal}");
    }
}

#[test]
fn test_word_operator_is_one_token() {
    assert_eq!(kinds("LE"), vec![(TokenKind::Operator, "LE".to_string())]);
    assert_eq!(kinds("L"), vec![(TokenKind::Identifier, "L".to_string())]);
    assert_eq!(kinds("LEX"), vec![(TokenKind::Identifier, "LEX".to_string())]);
}

#[test]
fn test_keywords_and_operators_are_case_sensitive() {
    assert_eq!(
        kinds("Program le plus PLUS"),
        vec![
            (TokenKind::Identifier, "Program".to_string()),
            (TokenKind::Identifier, "le".to_string()),
            (TokenKind::Operator, "plus".to_string()),
            (TokenKind::Identifier, "PLUS".to_string()),
        ]
    );
}

#[test]
fn test_comment_is_invisible() {
    let with_comment = Lexer::new("a {note} b").tokenize().expect("Lexing failed");
    let without = Lexer::new("a b").tokenize().expect("Lexing failed");

    let lexemes = |s: &eduparse::parser::TokenStream| {
        s.iter().map(|t| t.lexeme().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(lexemes(&with_comment), lexemes(&without));
}

#[test]
fn test_unterminated_comment() {
    let err = Lexer::new("program {\n\n").tokenize().unwrap_err();

    assert_eq!(err.kind, LexErrorKind::UnterminatedComment('}'));
    assert_eq!(err.location, SourceLocation::new(1, 9));
}

#[test]
fn test_columns_reset_per_line() {
    let tokens = Lexer::new("begin\n\tx as 1;\n  end.")
        .tokenize()
        .expect("Lexing failed");
    let locations: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();

    assert_eq!(
        locations,
        vec![(1, 1), (2, 2), (2, 4), (2, 7), (2, 8), (3, 3), (3, 6)]
    );
}

#[test]
fn test_two_character_operator_at_end_of_stream() {
    let vocab = Vocabulary::new(["if"], ["<", "<="], [';']);
    let tokens = Lexer::with_vocabulary("a <=", vocab)
        .tokenize()
        .expect("Lexing failed");

    assert_eq!(tokens.len(), 2);
    assert!(tokens[1].is(TokenKind::Operator, "<="));
    assert_eq!(tokens[1].location(), SourceLocation::new(1, 3));
    assert_eq!(tokens.end_location(), SourceLocation::new(1, 5));
}

#[test]
fn test_one_character_operator_at_end_of_stream() {
    let tokens = Lexer::new("x as ~").tokenize().expect("Lexing failed");
    assert!(tokens[2].is(TokenKind::Operator, "~"));
    assert_eq!(tokens[2].column(), 6);
}

#[test]
fn test_unknown_character_location() {
    let err = Lexer::new("program\n  x # y").tokenize().unwrap_err();

    assert_eq!(err.kind, LexErrorKind::UnknownCharacter('#'));
    assert_eq!((err.line(), err.column()), (2, 5));
}

#[test]
fn test_symbolic_operators_are_not_part_of_the_language() {
    // `+` only appears inside number literals
    let err = Lexer::new("x as a + b").tokenize().unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownCharacter('+'));
}
