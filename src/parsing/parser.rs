use super::ast::*;
use super::cursor::Cursor;
use super::trace::*;
use crate::diagnostic::*;
use crate::lexing::*;
use log::debug;

pub(super) type Result<T> = DiagnosticResult<T>;

/// Recursive-descent recognizer with one token of lookahead.
///
/// Every rule returns the node it recognized or the first diagnostic hit;
/// there is no recovery, so the first `Err` ends the parse.
pub struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) trace: Trace,
}

impl<'a> Parser<'a> {
    pub fn new(program: &'a LexedProgram, trace: TraceMode) -> Self {
        Parser {
            cursor: Cursor::new(&program.tokens),
            trace: Trace::new(trace),
        }
    }

    pub fn parse(&mut self) -> Result<Program> {
        self.program()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub(super) fn enter(&mut self, rule: Rule) {
        debug!(target: "parser", "Entering {} at token {}", rule.name(), self.cursor.position());
        self.trace.enter(rule);
    }

    fn program(&mut self) -> Result<Program> {
        self.enter(Rule::Program);
        let program_token = self.cursor.expect(TokenKind::Program)?;
        let name = self.cursor.expect(TokenKind::Identifier)?.clone();
        self.cursor.expect(TokenKind::Semicolon)?;
        let block = self.block()?;
        let period = self.cursor.expect(TokenKind::Period)?;

        Ok(Program {
            name,
            block,
            span: crate::source::Span::join(program_token, period),
        })
    }

    fn block(&mut self) -> Result<Block> {
        let variables = self.variable_declaration_part()?;
        let body = self.compound_statement()?;
        Ok(Block { variables, body })
    }

    fn compound_statement(&mut self) -> Result<Stmt> {
        self.enter(Rule::CompoundStatement);
        let begin = self.cursor.expect(TokenKind::Begin)?;

        let mut body = vec![self.statement()?];
        while self.cursor.matches(TokenKind::Semicolon) {
            if !self.cursor.peek().kind.starts_statement() {
                break;
            }
            body.push(self.statement()?);
        }

        let end = self.cursor.expect(TokenKind::End)?;
        Ok(Stmt::compound(begin, body, end))
    }

    fn statement(&mut self) -> Result<Stmt> {
        match self.cursor.peek().kind {
            TokenKind::Identifier => self.assignment(),
            TokenKind::Begin => self.compound_statement(),
            TokenKind::If => self.conditional(),
            TokenKind::While => self.repetitive(),
            _ => Err(Diagnostic::unexpected_token(self.cursor.peek())),
        }
    }

    fn assignment(&mut self) -> Result<Stmt> {
        self.enter(Rule::Assignment);
        let target = self.variable()?.clone();
        self.cursor.expect(TokenKind::Assign)?;
        let value = self.expression()?;
        Ok(Stmt::assignment(target, value))
    }

    fn conditional(&mut self) -> Result<Stmt> {
        self.enter(Rule::Conditional);
        let if_token = self.cursor.expect(TokenKind::If)?;
        let condition = self.expression()?;
        self.cursor.expect(TokenKind::Then)?;
        let then_branch = self.statement()?;

        let else_branch = if self.cursor.matches(TokenKind::Else) {
            Some(self.statement()?)
        } else {
            None
        };

        Ok(Stmt::if_stmt(if_token, condition, then_branch, else_branch))
    }

    fn repetitive(&mut self) -> Result<Stmt> {
        self.enter(Rule::Repetitive);
        let while_token = self.cursor.expect(TokenKind::While)?;
        let condition = self.expression()?;
        self.cursor.expect(TokenKind::Do)?;
        let body = self.statement()?;
        Ok(Stmt::while_stmt(while_token, condition, body))
    }

    fn variable(&mut self) -> Result<&'a Token> {
        self.cursor.expect(TokenKind::Identifier)
    }

    // Expressions

    pub(super) fn expression(&mut self) -> Result<Expr> {
        self.enter(Rule::Expression);
        let lhs = self.simple_expression()?;

        if self.cursor.peek().kind.is_relational() {
            let op = self.relation()?.clone();
            let rhs = self.simple_expression()?;
            Ok(Expr::binary(lhs, op, rhs))
        } else {
            Ok(lhs)
        }
    }

    fn relation(&mut self) -> Result<&'a Token> {
        self.enter(Rule::Relation);
        let token = self.cursor.peek();
        if token.kind.is_relational() {
            Ok(self.cursor.advance())
        } else {
            Err(Diagnostic::relational_operator_expected(token))
        }
    }

    fn simple_expression(&mut self) -> Result<Expr> {
        self.enter(Rule::SimpleExpression);

        let sign = self.sign();
        let first = self.term()?;
        let mut lhs = match sign {
            Some(sign) => Expr::unary(sign.clone(), first),
            None => first,
        };

        while let Some(op) = self.sign() {
            let rhs = self.term()?;
            lhs = Expr::binary(lhs, op.clone(), rhs);
        }

        Ok(lhs)
    }

    fn sign(&mut self) -> Option<&'a Token> {
        if self.cursor.check_any(&[TokenKind::Plus, TokenKind::Minus]) {
            Some(self.cursor.advance())
        } else {
            None
        }
    }

    fn term(&mut self) -> Result<Expr> {
        self.enter(Rule::Term);
        let mut lhs = self.factor()?;

        while self.cursor.check_any(&[TokenKind::Star, TokenKind::Slash]) {
            let op = self.cursor.advance().clone();
            let rhs = self.factor()?;
            lhs = Expr::binary(lhs, op, rhs);
        }

        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr> {
        self.enter(Rule::Factor);
        let token = self.cursor.peek();

        match token.kind {
            TokenKind::Identifier => Ok(Expr::variable(self.variable()?)),
            TokenKind::Number => Ok(Expr::literal(self.cursor.advance())),
            TokenKind::LeftParen => {
                let left_paren = self.cursor.advance();
                let inner = self.expression()?;
                let right_paren = self.cursor.expect(TokenKind::RightParen)?;
                Ok(Expr::grouping(left_paren, inner, right_paren))
            }
            _ => Err(Diagnostic::invalid_factor(token)),
        }
    }
}
