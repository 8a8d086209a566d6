pub mod buffer;
pub mod lexer;
pub mod token;

pub use buffer::{TokenBuffer, TokenBufferBuilder};
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenString};

pub struct LexedProgram {
    pub source: crate::source::Source,
    pub tokens: TokenBuffer,
}
