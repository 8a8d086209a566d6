use super::ast::*;
use crate::lexing::*;
use std::fs;
use std::io;

/// Renders a program's syntax tree as a Graphviz digraph
pub struct DotWriter {
    lines: Vec<String>,
    next_id: usize,
}

impl DotWriter {
    pub fn render(program: &Program) -> String {
        let mut writer = DotWriter {
            lines: Vec::new(),
            next_id: 0,
        };

        let root = writer.node(&format!("program {}", program.name.lexeme()));
        for decl in &program.block.variables {
            let names: Vec<&str> = decl.names.iter().map(|n| n.lexeme()).collect();
            let id = writer.node(&format!("var {} : {}", names.join(", "), decl.var_type.lexeme()));
            writer.edge(root, id);
        }
        let body = program.block.body.accept(&mut writer);
        writer.edge(root, body);

        let mut output = String::from("digraph AST {\n  node [shape=box];\n");
        for line in &writer.lines {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }
        output.push_str("}\n");
        output
    }

    pub fn write(program: &Program, path: &str) -> io::Result<()> {
        fs::write(path, DotWriter::render(program))
    }

    fn node(&mut self, label: &str) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        let label = label.replace('\\', "\\\\").replace('"', "\\\"");
        self.lines.push(format!("n{} [label=\"{}\"];", id, label));
        id
    }

    fn edge(&mut self, from: usize, to: usize) {
        self.lines.push(format!("n{} -> n{};", from, to));
    }

    fn children(&mut self, label: &str, children: &[usize]) -> usize {
        let id = self.node(label);
        for child in children {
            self.edge(id, *child);
        }
        id
    }
}

impl StmtVisitor for DotWriter {
    type StmtResult = usize;

    fn visit_assignment_stmt(&mut self, _stmt: &Stmt, target: &Token, value: &Expr) -> usize {
        let value = value.accept(self);
        self.children(&format!("{} :=", target.lexeme()), &[value])
    }

    fn visit_compound_stmt(&mut self, _stmt: &Stmt, body: &[Stmt]) -> usize {
        let body: Vec<usize> = body.iter().map(|s| s.accept(self)).collect();
        self.children("begin ... end", &body)
    }

    fn visit_if_stmt(
        &mut self,
        _stmt: &Stmt,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> usize {
        let mut children = vec![condition.accept(self), then_branch.accept(self)];
        if let Some(else_branch) = else_branch {
            children.push(else_branch.accept(self));
        }
        self.children("if", &children)
    }

    fn visit_while_stmt(&mut self, _stmt: &Stmt, condition: &Expr, body: &Stmt) -> usize {
        let children = [condition.accept(self), body.accept(self)];
        self.children("while", &children)
    }
}

impl ExprVisitor for DotWriter {
    type ExprResult = usize;

    fn visit_binary_expr(&mut self, _expr: &Expr, lhs: &Expr, op: &Token, rhs: &Expr) -> usize {
        let children = [lhs.accept(self), rhs.accept(self)];
        self.children(op.lexeme(), &children)
    }

    fn visit_unary_expr(&mut self, _expr: &Expr, op: &Token, operand: &Expr) -> usize {
        let operand = operand.accept(self);
        self.children(&format!("unary {}", op.lexeme()), &[operand])
    }

    fn visit_literal_expr(&mut self, _expr: &Expr, token: &Token) -> usize {
        self.node(token.lexeme())
    }

    fn visit_variable_expr(&mut self, _expr: &Expr, name: &Token) -> usize {
        self.node(name.lexeme())
    }

    fn visit_grouping_expr(&mut self, _expr: &Expr, inner: &Expr) -> usize {
        let inner = inner.accept(self);
        self.children("( )", &[inner])
    }
}
