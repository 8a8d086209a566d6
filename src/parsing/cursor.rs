use crate::diagnostic::*;
use crate::lexing::*;
use log::trace;

/// A read-only position into a [`TokenBuffer`].
///
/// The position never moves past the end marker, so looking ahead at the end
/// of the input keeps yielding `EOF`.
pub struct Cursor<'a> {
    tokens: &'a TokenBuffer,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenBuffer) -> Self {
        Cursor {
            tokens,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> &'a Token {
        let tokens: &'a TokenBuffer = self.tokens;
        tokens.get(self.position).unwrap_or_else(|| tokens.last())
    }

    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if self.position < self.tokens.last_index() {
            self.position += 1;
            trace!(target: "parser", "Consumed {}", token);
        }
        token
    }

    pub fn expect(&mut self, kind: TokenKind) -> DiagnosticResult<&'a Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(Diagnostic::unexpected_token(self.peek()))
        }
    }

    /// Consumes the lookahead only if it is of the given kind
    pub fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::EOF)
    }
}
