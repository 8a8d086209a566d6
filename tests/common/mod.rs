pub use micropascal::diagnostic::*;
use micropascal::lexing::*;
use micropascal::parsing::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_token {

    use micropascal::lexing::*;
    use micropascal::source::{self, Span};

    pub fn test(kind: TokenKind, text: &str, line: usize) -> Token {
        let span = Span::new(&source::text(text), 0, text.len(), line);
        if kind == TokenKind::Number {
            Token::number(text.parse().unwrap(), span)
        } else {
            Token::new(kind, span)
        }
    }

    pub fn number(text: &str) -> Token {
        test(TokenKind::Number, text, 1)
    }

    pub fn identifier(text: &str) -> Token {
        test(TokenKind::Identifier, text, 1)
    }

    pub fn keyword(kind: TokenKind, text: &str) -> Token {
        test(kind, text, 1)
    }

    pub fn symbol(kind: TokenKind, text: &str) -> Token {
        test(kind, text, 1)
    }

    pub fn eof(line: usize) -> Token {
        test(TokenKind::EOF, "", line)
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

/// Lexes and parses `text`, returning the tree, the collected rule trace and
/// any reported diagnostics
#[allow(dead_code)]
pub fn test_parse(text: &str) -> (Option<Program>, Vec<Rule>, Vec<Diagnostic>) {
    let (reporter, mut diagnostics) = TestReporter::new();

    let lexed = match Lexer::new(micropascal::source::text(text)).lex() {
        Ok(lexed) => lexed,
        Err(diagnostic) => {
            reporter.report(diagnostic);
            return (None, Vec::new(), diagnostics.unwrap());
        }
    };

    let mut parser = Parser::new(&lexed, TraceMode::Collect);
    let program = parser.parse().map_err(|d| reporter.report(d)).ok();
    let rules = parser.trace().rules().to_vec();

    (program, rules, diagnostics.unwrap())
}

#[allow(dead_code)]
pub fn assert_parses(text: &str) -> TestResult {
    let (program, _, diagnostics) = test_parse(text);
    if program.is_some() && diagnostics.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Expected no diagnostics, got: {}",
            diagnostics.diagnostic_string()
        ))
    }
}

/// Asserts that parsing fails with exactly the given one-line error
#[allow(dead_code)]
pub fn assert_error(text: &str, expected: &str) -> TestResult {
    let (program, _, diagnostics) = test_parse(text);
    if program.is_some() {
        return Err(String::from("Expected parse to fail"));
    }
    let got: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_slices_equal(
        "diagnostics",
        &got,
        &[String::from(expected)],
        |lhs, rhs| lhs == rhs,
        &diagnostics.diagnostic_string(),
    )
}

#[allow(dead_code)]
pub fn tree(program: &Program) -> Vec<String> {
    let mut printer = ASTPrinter::collect();
    printer.print(program);
    printer.collected().to_vec()
}

pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.iter().count() != expected.iter().count() {
        let one_line = format!(
            "Expected {} {}, got {}",
            expected.iter().count(),
            kind,
            got.iter().count(),
        );
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
