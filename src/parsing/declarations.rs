use super::ast::*;
use super::parser::{Parser, Result};
use super::trace::Rule;
use crate::diagnostic::*;
use crate::lexing::*;
use crate::source::Span;

impl<'a> Parser<'a> {
    /// `var <declaration> { ; <declaration> } ;`, or nothing when the block
    /// does not start with `var`.
    ///
    /// A `;` followed by `begin` closes the section and leaves `begin` for the
    /// compound statement.
    pub(super) fn variable_declaration_part(&mut self) -> Result<Vec<VariableDecl>> {
        if !self.cursor.check(TokenKind::Var) {
            return Ok(Vec::new());
        }

        self.enter(Rule::VariableDeclarationPart);
        self.cursor.expect(TokenKind::Var)?;

        let mut declarations = vec![self.variable_declaration()?];
        while self.cursor.matches(TokenKind::Semicolon) {
            match self.cursor.peek().kind {
                TokenKind::Begin => break,
                TokenKind::Identifier => declarations.push(self.variable_declaration()?),
                _ => return Err(Diagnostic::unexpected_token(self.cursor.peek())),
            }
        }

        Ok(declarations)
    }

    fn variable_declaration(&mut self) -> Result<VariableDecl> {
        self.enter(Rule::VariableDeclaration);
        let names = self.identifier_list()?;
        self.cursor.expect(TokenKind::Colon)?;
        let var_type = self.var_type()?;

        let span = Span::join(&names[0], &var_type);
        Ok(VariableDecl {
            names,
            var_type,
            span,
        })
    }

    fn identifier_list(&mut self) -> Result<Vec<Token>> {
        self.enter(Rule::IdentifierList);
        let mut names = vec![self.cursor.expect(TokenKind::Identifier)?.clone()];

        while self.cursor.matches(TokenKind::Comma) {
            names.push(self.cursor.expect(TokenKind::Identifier)?.clone());
        }

        Ok(names)
    }

    fn var_type(&mut self) -> Result<Token> {
        self.enter(Rule::Type);
        let token = self.cursor.peek();
        match token.kind {
            TokenKind::Integer | TokenKind::Real => Ok(self.cursor.advance().clone()),
            _ => Err(Diagnostic::unexpected_token(token)),
        }
    }
}
