use crate::source::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Number,
    Identifier,

    // Keywords
    Program,
    Var,
    Integer,
    Real,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Assign,

    // Punctuation
    LeftParen,
    RightParen,
    Period,
    Semicolon,
    Colon,
    Comma,

    EOF,
}

impl TokenKind {
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        let kind = match lexeme {
            "program" => TokenKind::Program,
            "var" => TokenKind::Var,
            "integer" => TokenKind::Integer,
            "real" => TokenKind::Real,
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            _ => return None,
        };
        Some(kind)
    }

    /// Symbolic name, shown in diagnostics when a token has no spelling
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMERO",
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "<>",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Assign => ":=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Period => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::EOF => "FIM_DE_ARQUIVO",
        }
    }

    pub fn is_relational(&self) -> bool {
        match self {
            TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::Less
            | TokenKind::LessEqual
            | TokenKind::Greater
            | TokenKind::GreaterEqual => true,
            _ => false,
        }
    }

    /// Whether a statement can start with this kind
    pub fn starts_statement(&self) -> bool {
        match self {
            TokenKind::Identifier | TokenKind::Begin | TokenKind::If | TokenKind::While => true,
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: f64,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            value: 0.0,
            span,
        }
    }

    pub fn number(value: f64, span: Span) -> Self {
        Token {
            kind: TokenKind::Number,
            value,
            span,
        }
    }

    pub fn lexeme(&self) -> &str {
        self.span.lexeme()
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    /// The source spelling, or the kind's name for tokens without one
    pub fn display_text(&self) -> &str {
        let lexeme = self.lexeme();
        if lexeme.is_empty() {
            self.kind.name()
        } else {
            lexeme
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Token) -> bool {
        self.kind == other.kind
            && self.lexeme() == other.lexeme()
            && self.value == other.value
            && self.line() == other.line()
    }
}

impl ContainsSpan for Token {
    fn span(&self) -> &Span {
        &self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {:?}, lexeme: {}, line: {})",
            self.kind,
            self.lexeme(),
            self.line()
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks: Vec<String> = self.iter().map(|t| t.to_string()).collect();
        String::from("Vec(") + &toks.join(", ") + ")"
    }
}
