use crate::lexing::Token;
use crate::source::*;

pub struct Program {
    pub name: Token,
    pub block: Block,
    pub span: Span,
}

pub struct Block {
    pub variables: Vec<VariableDecl>,
    pub body: Stmt,
}

pub struct VariableDecl {
    pub names: Vec<Token>,
    pub var_type: Token,
    pub span: Span,
}

impl ContainsSpan for VariableDecl {
    fn span(&self) -> &Span {
        &self.span
    }
}

// Stmt

pub enum StmtKind {
    Assignment(Token, Expr),
    Compound(Vec<Stmt>),
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    While(Expr, Box<Stmt>),
}

pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::StmtResult {
        match &self.kind {
            StmtKind::Assignment(target, value) => {
                visitor.visit_assignment_stmt(self, target, value)
            }
            StmtKind::Compound(body) => visitor.visit_compound_stmt(self, body),
            StmtKind::If(condition, then_branch, else_branch) => visitor.visit_if_stmt(
                self,
                condition,
                then_branch,
                else_branch.as_ref().map(|s| &**s),
            ),
            StmtKind::While(condition, body) => visitor.visit_while_stmt(self, condition, body),
        }
    }

    pub fn assignment(target: Token, value: Expr) -> Self {
        let span = Span::join(&target, &value);
        Stmt::new(StmtKind::Assignment(target, value), span)
    }

    pub fn compound(begin: &Token, body: Vec<Stmt>, end: &Token) -> Self {
        let span = Span::join(begin, end);
        Stmt::new(StmtKind::Compound(body), span)
    }

    pub fn if_stmt(
        if_token: &Token,
        condition: Expr,
        then_branch: Stmt,
        else_branch: Option<Stmt>,
    ) -> Self {
        let end: &Span = match &else_branch {
            Some(else_branch) => &else_branch.span,
            None => &then_branch.span,
        };
        let span = Span::join(if_token, end);
        Stmt::new(
            StmtKind::If(condition, Box::new(then_branch), else_branch.map(Box::new)),
            span,
        )
    }

    pub fn while_stmt(while_token: &Token, condition: Expr, body: Stmt) -> Self {
        let span = Span::join(while_token, &body);
        Stmt::new(StmtKind::While(condition, Box::new(body)), span)
    }
}

impl ContainsSpan for Stmt {
    fn span(&self) -> &Span {
        &self.span
    }
}

pub trait StmtVisitor {
    type StmtResult;

    fn visit_assignment_stmt(&mut self, stmt: &Stmt, target: &Token, value: &Expr)
        -> Self::StmtResult;
    fn visit_compound_stmt(&mut self, stmt: &Stmt, body: &[Stmt]) -> Self::StmtResult;
    fn visit_if_stmt(
        &mut self,
        stmt: &Stmt,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Self::StmtResult;
    fn visit_while_stmt(&mut self, stmt: &Stmt, condition: &Expr, body: &Stmt)
        -> Self::StmtResult;
}

// Expr

pub enum ExprKind {
    Binary(Box<Expr>, Token, Box<Expr>),
    Unary(Token, Box<Expr>),
    Literal(Token),
    Variable(Token),
    Grouping(Box<Expr>),
}

pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::ExprResult {
        match &self.kind {
            ExprKind::Binary(lhs, op, rhs) => visitor.visit_binary_expr(self, lhs, op, rhs),
            ExprKind::Unary(op, operand) => visitor.visit_unary_expr(self, op, operand),
            ExprKind::Literal(token) => visitor.visit_literal_expr(self, token),
            ExprKind::Variable(name) => visitor.visit_variable_expr(self, name),
            ExprKind::Grouping(inner) => visitor.visit_grouping_expr(self, inner),
        }
    }

    pub fn binary(lhs: Expr, op: Token, rhs: Expr) -> Self {
        let span = Span::join(&lhs, &rhs);
        Expr::new(ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)), span)
    }

    pub fn unary(op: Token, operand: Expr) -> Self {
        let span = Span::join(&op, &operand);
        Expr::new(ExprKind::Unary(op, Box::new(operand)), span)
    }

    pub fn literal(token: &Token) -> Self {
        Expr::new(ExprKind::Literal(token.clone()), token.span.clone())
    }

    pub fn variable(name: &Token) -> Self {
        Expr::new(ExprKind::Variable(name.clone()), name.span.clone())
    }

    pub fn grouping(left_paren: &Token, inner: Expr, right_paren: &Token) -> Self {
        let span = Span::join(left_paren, right_paren);
        Expr::new(ExprKind::Grouping(Box::new(inner)), span)
    }
}

impl ContainsSpan for Expr {
    fn span(&self) -> &Span {
        &self.span
    }
}

pub trait ExprVisitor {
    type ExprResult;

    fn visit_binary_expr(&mut self, expr: &Expr, lhs: &Expr, op: &Token, rhs: &Expr)
        -> Self::ExprResult;
    fn visit_unary_expr(&mut self, expr: &Expr, op: &Token, operand: &Expr) -> Self::ExprResult;
    fn visit_literal_expr(&mut self, expr: &Expr, token: &Token) -> Self::ExprResult;
    fn visit_variable_expr(&mut self, expr: &Expr, name: &Token) -> Self::ExprResult;
    fn visit_grouping_expr(&mut self, expr: &Expr, inner: &Expr) -> Self::ExprResult;
}
