// End-to-end checks of the eduparse binary

use std::process::{Command, Output};

fn demo(name: &str) -> String {
    format!("{}/demos/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_eduparse"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run eduparse")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_valid_program_exits_zero() {
    let output = run(&[&demo("squares.prg")]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(text.lines().next().is_some_and(|l| l.starts_with("Token: Keyword")));
    assert!(text.contains("Token: Keyword         Lexeme: program    Line: 3 Col: 1"));
    assert_eq!(
        text.lines().last(),
        Some("Parsed successfully: 3 declarations, 6 statements.")
    );
}

#[test]
fn test_undeclared_variable_exits_one() {
    let output = run(&[&demo("undeclared.prg")]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("Token: Identifier"));
    assert_eq!(
        text.lines().last(),
        Some("Parse error at line 5, column 10: undeclared variable 'count'")
    );
}

#[test]
fn test_lexical_error_skips_listing() {
    let output = run(&[&demo("malformed.prg")]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(!text.contains("Token:"));
    assert_eq!(
        text.trim_end(),
        "Lexer error at line 4, column 14: malformed number '12g'"
    );
}

#[test]
fn test_quiet_suppresses_listing() {
    for flag in ["-q", "--quiet"] {
        let output = run(&[flag, &demo("squares.prg")]);
        let text = stdout(&output);

        assert_eq!(output.status.code(), Some(0), "{flag}");
        assert!(!text.contains("Token:"), "{flag}");
        assert_eq!(
            text.trim_end(),
            "Parsed successfully: 3 declarations, 6 statements."
        );
    }
}

#[test]
fn test_missing_file_exits_one() {
    let output = run(&[&demo("does-not-exist.prg")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
