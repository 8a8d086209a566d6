use super::token::*;
use std::ops::Index;
use std::slice;

/// The lexer's output: every token of a source in order, closed by exactly one
/// `EOF` token.
///
/// Tokens can only be appended while the buffer is being filled; once
/// [`TokenBuffer::finish`] has added the end marker the buffer is read-only.
#[derive(Debug)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

pub struct TokenBufferBuilder {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn builder() -> TokenBufferBuilder {
        TokenBufferBuilder { tokens: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The end marker; always present
    pub fn last(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn last_index(&self) -> usize {
        self.tokens.len() - 1
    }

    pub fn iter(&self) -> slice::Iter<Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenBuffer {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl TokenBufferBuilder {
    pub fn push(&mut self, token: Token) {
        debug_assert!(token.kind != TokenKind::EOF);
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn finish(mut self, eof: Token) -> TokenBuffer {
        debug_assert!(eof.kind == TokenKind::EOF);
        self.tokens.push(eof);
        TokenBuffer {
            tokens: self.tokens,
        }
    }
}
