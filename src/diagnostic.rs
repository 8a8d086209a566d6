use crate::lexing::token::*;
use crate::source::*;
use colored::*;
use std::fmt;
use std::rc::Rc;

pub type DiagnosticResult<T> = Result<T, Diagnostic>;

const UNEXPECTED_EOF: &str = "fim de arquivo não esperado";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
}

#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn lexical(span: Span, message: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lexical,
            span,
            message: String::from(message),
        }
    }

    pub fn syntax<T: ContainsSpan>(span: &T, message: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            span: span.span().clone(),
            message: String::from(message),
        }
    }

    pub fn unexpected_character(span: Span, character: char) -> Self {
        Diagnostic::lexical(span, &format!("unexpected character '{}'", character))
    }

    pub fn unexpected_token(token: &Token) -> Self {
        if token.kind == TokenKind::EOF {
            Diagnostic::syntax(token, UNEXPECTED_EOF)
        } else {
            Diagnostic::syntax(
                token,
                &format!("token nao esperado [{}]", token.display_text()),
            )
        }
    }

    pub fn relational_operator_expected(token: &Token) -> Self {
        Diagnostic::syntax(token, "operador relacional esperado")
    }

    pub fn invalid_factor(token: &Token) -> Self {
        if token.kind == TokenKind::EOF {
            Diagnostic::syntax(token, UNEXPECTED_EOF)
        } else {
            Diagnostic::syntax(
                token,
                &format!("fator invalido [{}]", token.display_text()),
            )
        }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Diagnostic) -> bool {
        self.kind == other.kind && self.line() == other.line() && self.message == other.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Lexical => write!(f, "{}: {}", self.line(), self.message),
            DiagnosticKind::Syntax => write!(f, "{}:{}.", self.line(), self.message),
        }
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        let lines: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        lines.join("\n")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

/// Writes the one-line `<line>:<message>.` form to stderr
pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// Shows the offending source line with the span underlined
pub struct PrettyReporter {}

impl PrettyReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(PrettyReporter {})
    }
}

impl Reporter for PrettyReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = match diagnostic.kind {
            DiagnosticKind::Lexical => "• Lexical error:".red().bold(),
            DiagnosticKind::Syntax => "• Syntax error:".red().bold(),
        };
        eprintln!("\n{} {}\n", header, diagnostic.message);
        let (line, offset) = diagnostic.span.entire_line();
        eprintln!("  {}", line);

        let offset = (0..offset).map(|_| " ").collect::<String>();
        let width = diagnostic.span.lexeme().chars().count().max(1);
        let underline = (0..width).map(|_| "^").collect::<String>();
        eprintln!("  {}{}", offset, underline.red());
        eprintln!("  {}\n", diagnostic.span.location());
    }
}
