use super::buffer::*;
use super::token::*;
use super::LexedProgram;
use crate::diagnostic::*;
use crate::source::*;
use log::trace;

type Result<T> = DiagnosticResult<T>;

pub struct Lexer {
    source: Source,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn lex(mut self) -> Result<LexedProgram> {
        let mut tokens = TokenBuffer::builder();

        loop {
            self.skip_whitespace();
            self.start = self.current;
            if self.is_at_end() {
                break;
            }
            let token = self.token()?;
            trace!(target: "lexer", "{}", token);
            tokens.push(token);
        }

        let eof = self.make_token(TokenKind::EOF);
        trace!(target: "lexer", "Reached end of input on line {} after {} tokens", self.line, tokens.len());

        Ok(LexedProgram {
            source: self.source,
            tokens: tokens.finish(eof),
        })
    }

    fn token(&mut self) -> Result<Token> {
        let character = self.advance();
        let token = match character {
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ';' => self.make_token(TokenKind::Semicolon),
            ',' => self.make_token(TokenKind::Comma),
            '=' => self.make_token(TokenKind::Equal),
            '.' => self.make_token(TokenKind::Period),
            ':' => self.conditional_make_token('=', TokenKind::Assign, TokenKind::Colon),
            '>' => self.conditional_make_token('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '<' => {
                if self.consume('=') {
                    self.make_token(TokenKind::LessEqual)
                } else if self.consume('>') {
                    self.make_token(TokenKind::NotEqual)
                } else {
                    self.make_token(TokenKind::Less)
                }
            }
            '0'..='9' => self.number(),
            'a'..='z' | 'A'..='Z' => self.identifier(),
            _ => {
                return Err(Diagnostic::unexpected_character(
                    self.current_span(),
                    character,
                ))
            }
        };
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while let Some(character) = self.peek() {
            if character == '\n' {
                self.line += 1;
            } else if character != ' ' && character > '\u{1F}' {
                break;
            }
            self.advance();
        }
    }

    fn number(&mut self) -> Token {
        self.digits();

        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
            self.digits();
        }

        if let Some('e') | Some('E') = self.peek() {
            let exponent_start = self.current;
            self.advance();
            if let Some('+') | Some('-') = self.peek() {
                self.advance();
            }
            if self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.digits();
            } else {
                self.current = exponent_start;
            }
        }

        let span = self.current_span();
        let value = span.lexeme().parse::<f64>().unwrap_or(0.0);
        Token::number(value, span)
    }

    fn digits(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn identifier(&mut self) -> Token {
        while let Some('0'..='9') | Some('a'..='z') | Some('A'..='Z') | Some('_') = self.peek() {
            self.advance();
        }

        let span = self.current_span();
        let kind = TokenKind::keyword(span.lexeme()).unwrap_or(TokenKind::Identifier);
        Token::new(kind, span)
    }

    fn conditional_make_token(
        &mut self,
        character: char,
        kind1: TokenKind,
        kind2: TokenKind,
    ) -> Token {
        if self.consume(character) {
            self.make_token(kind1)
        } else {
            self.make_token(kind2)
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_span())
    }

    fn current_span(&self) -> Span {
        Span::new(
            &self.source,
            self.start,
            self.current - self.start,
            self.line,
        )
    }

    fn consume(&mut self, character: char) -> bool {
        if self.peek() == Some(character) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> char {
        match self.peek() {
            Some(character) => {
                self.current += character.len_utf8();
                character
            }
            None => '\0',
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.character_at(self.current)
    }

    fn peek_next(&self) -> Option<char> {
        let character = self.peek()?;
        self.source.character_at(self.current + character.len_utf8())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.length()
    }
}
