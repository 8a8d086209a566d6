use micropascal::diagnostic::*;
use micropascal::lexing::*;

mod common;
use common::*;

#[test]
fn math() -> TestResult {
    assert_success(
        "4 + x5 * (y_1 - 2) / 3",
        &[
            test_token::number("4"),
            test_token::symbol(TokenKind::Plus, "+"),
            test_token::identifier("x5"),
            test_token::symbol(TokenKind::Star, "*"),
            test_token::symbol(TokenKind::LeftParen, "("),
            test_token::identifier("y_1"),
            test_token::symbol(TokenKind::Minus, "-"),
            test_token::number("2"),
            test_token::symbol(TokenKind::RightParen, ")"),
            test_token::symbol(TokenKind::Slash, "/"),
            test_token::number("3"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn numbers() -> TestResult {
    assert_success("4", &[test_token::number("4"), test_token::eof(1)])?;
    assert_success("0.01", &[test_token::number("0.01"), test_token::eof(1)])?;
    assert_success("2.5e3", &[test_token::number("2.5e3"), test_token::eof(1)])
}

#[test]
fn number_values() {
    let tokens = lex("12 3.25 1e2").unwrap();
    let values: Vec<f64> = tokens.iter().take(3).map(|t| t.value).collect();
    assert_eq!(values, vec![12.0, 3.25, 100.0]);
}

#[test]
fn period_after_number_is_punctuation() -> TestResult {
    assert_success(
        "1.",
        &[
            test_token::number("1"),
            test_token::symbol(TokenKind::Period, "."),
            test_token::eof(1),
        ],
    )
}

#[test]
fn dangling_exponent_is_identifier() -> TestResult {
    assert_success(
        "3end",
        &[
            test_token::number("3"),
            test_token::keyword(TokenKind::End, "end"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn keywords() -> TestResult {
    assert_success(
        "program var integer real begin end if then else while do",
        &[
            test_token::keyword(TokenKind::Program, "program"),
            test_token::keyword(TokenKind::Var, "var"),
            test_token::keyword(TokenKind::Integer, "integer"),
            test_token::keyword(TokenKind::Real, "real"),
            test_token::keyword(TokenKind::Begin, "begin"),
            test_token::keyword(TokenKind::End, "end"),
            test_token::keyword(TokenKind::If, "if"),
            test_token::keyword(TokenKind::Then, "then"),
            test_token::keyword(TokenKind::Else, "else"),
            test_token::keyword(TokenKind::While, "while"),
            test_token::keyword(TokenKind::Do, "do"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn keywords_are_case_sensitive() -> TestResult {
    assert_success(
        "Begin ending",
        &[
            test_token::identifier("Begin"),
            test_token::identifier("ending"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn compound_symbols() -> TestResult {
    assert_success(
        ":= : <= <> < >= > = ; , .",
        &[
            test_token::symbol(TokenKind::Assign, ":="),
            test_token::symbol(TokenKind::Colon, ":"),
            test_token::symbol(TokenKind::LessEqual, "<="),
            test_token::symbol(TokenKind::NotEqual, "<>"),
            test_token::symbol(TokenKind::Less, "<"),
            test_token::symbol(TokenKind::GreaterEqual, ">="),
            test_token::symbol(TokenKind::Greater, ">"),
            test_token::symbol(TokenKind::Equal, "="),
            test_token::symbol(TokenKind::Semicolon, ";"),
            test_token::symbol(TokenKind::Comma, ","),
            test_token::symbol(TokenKind::Period, "."),
            test_token::eof(1),
        ],
    )
}

#[test]
fn adjacent_symbols() -> TestResult {
    assert_success(
        "a:=b<>c",
        &[
            test_token::identifier("a"),
            test_token::symbol(TokenKind::Assign, ":="),
            test_token::identifier("b"),
            test_token::symbol(TokenKind::NotEqual, "<>"),
            test_token::identifier("c"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn line_numbers() -> TestResult {
    assert_success(
        "x\r\n\ty\n\n  z\n",
        &[
            test_token::test(TokenKind::Identifier, "x", 1),
            test_token::test(TokenKind::Identifier, "y", 2),
            test_token::test(TokenKind::Identifier, "z", 4),
            test_token::eof(5),
        ],
    )
}

#[test]
fn control_characters_are_skipped() -> TestResult {
    assert_success(
        "x\u{7}\u{1F}y",
        &[
            test_token::identifier("x"),
            test_token::identifier("y"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn byte_order_mark() -> TestResult {
    assert_success(
        "\u{FEFF}program",
        &[
            test_token::keyword(TokenKind::Program, "program"),
            test_token::eof(1),
        ],
    )
}

#[test]
fn empty_source() -> TestResult {
    assert_success("", &[test_token::eof(1)])
}

#[test]
fn illegal_char() {
    let error = lex("4\n  $3").unwrap_err();
    assert_eq!(error.kind, DiagnosticKind::Lexical);
    assert_eq!(error.to_string(), "2: unexpected character '$'");
}

#[test]
fn illegal_char_stops_lexing() {
    let error = lex("x := 1;\ny := {2};\nz := @").unwrap_err();
    assert_eq!(error.to_string(), "2: unexpected character '{'");
}

#[test]
fn underscore_cannot_start_identifier() {
    let error = lex("_x").unwrap_err();
    assert_eq!(error.to_string(), "1: unexpected character '_'");
}

#[test]
fn lexing_is_repeatable() {
    let text = "program P;\nvar a: real;\nbegin a := 1.5 * (a - 2) end.";
    let first = lex(text).unwrap();
    let second = lex(text).unwrap();
    assert!(first.as_slice() == second.as_slice());
    assert_eq!(first.len(), 21);
}

// Helpers

fn assert_success(text: &str, expected: &[Token]) -> TestResult {
    match lex(text) {
        Ok(tokens) => assert_slices_equal(
            "tokens",
            tokens.as_slice(),
            expected,
            |lhs, rhs| lhs == rhs,
            &tokens.as_slice().token_string(),
        ),
        Err(diagnostic) => Err(format!("Expected no diagnostics, got: {}", diagnostic)),
    }
}

fn lex(text: &str) -> DiagnosticResult<TokenBuffer> {
    let source = micropascal::source::text(text);
    Lexer::new(source).lex().map(|program| program.tokens)
}
