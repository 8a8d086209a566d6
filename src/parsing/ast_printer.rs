use super::ast::*;
use crate::lexing::*;

enum ASTPrinterMode {
    Stdout,
    Collect(Vec<String>),
}

pub struct ASTPrinter {
    indent: i32,
    mode: ASTPrinterMode,
}

impl ASTPrinter {
    pub fn new() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Stdout,
        }
    }

    pub fn collect() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Collect(Vec::new()),
        }
    }

    pub fn print(&mut self, program: &Program) {
        self.write_ln(&format!("Program({})", program.name.lexeme()));
        self.indent(|visitor| {
            if !program.block.variables.is_empty() {
                visitor.write_ln("Variables");
                visitor.indent(|visitor| {
                    program
                        .block
                        .variables
                        .iter()
                        .for_each(|decl| visitor.write_variable_decl(decl));
                });
            }
            program.block.body.accept(visitor);
        });
    }

    pub fn collected(&self) -> &[String] {
        match &self.mode {
            ASTPrinterMode::Collect(collection) => &collection,
            _ => &[],
        }
    }

    fn write_ln(&mut self, token: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        let line = format!("{}{}", indent, token);

        match &mut self.mode {
            ASTPrinterMode::Stdout => println!("{}", line),
            ASTPrinterMode::Collect(collection) => collection.push(line),
        }
    }

    fn indent<T>(&mut self, block: T)
    where
        T: Fn(&mut ASTPrinter) -> (),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }

    fn write_variable_decl(&mut self, decl: &VariableDecl) {
        let names: Vec<&str> = decl.names.iter().map(|n| n.lexeme()).collect();
        self.write_ln(&format!(
            "VariableDecl(names: {}, type: {})",
            names.join(", "),
            decl.var_type.lexeme()
        ));
    }
}

impl StmtVisitor for ASTPrinter {
    type StmtResult = ();

    fn visit_assignment_stmt(&mut self, _stmt: &Stmt, target: &Token, value: &Expr) {
        self.write_ln(&format!("Assignment({})", target.lexeme()));
        self.indent(|visitor| {
            value.accept(visitor);
        })
    }

    fn visit_compound_stmt(&mut self, _stmt: &Stmt, body: &[Stmt]) {
        self.write_ln("Compound");
        self.indent(|visitor| {
            body.iter().for_each(|s| s.accept(visitor));
        })
    }

    fn visit_if_stmt(
        &mut self,
        _stmt: &Stmt,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) {
        self.write_ln("If");
        self.indent(|visitor| {
            visitor.write_ln("Condition");
            visitor.indent(|visitor| {
                condition.accept(visitor);
            });
            visitor.write_ln("Then");
            visitor.indent(|visitor| {
                then_branch.accept(visitor);
            });
            if let Some(else_branch) = else_branch {
                visitor.write_ln("Else");
                visitor.indent(|visitor| {
                    else_branch.accept(visitor);
                });
            }
        })
    }

    fn visit_while_stmt(&mut self, _stmt: &Stmt, condition: &Expr, body: &Stmt) {
        self.write_ln("While");
        self.indent(|visitor| {
            visitor.write_ln("Condition");
            visitor.indent(|visitor| {
                condition.accept(visitor);
            });
            visitor.write_ln("Body");
            visitor.indent(|visitor| {
                body.accept(visitor);
            });
        })
    }
}

impl ExprVisitor for ASTPrinter {
    type ExprResult = ();

    fn visit_binary_expr(&mut self, _expr: &Expr, lhs: &Expr, op: &Token, rhs: &Expr) {
        self.write_ln(&format!("Binary({})", op.lexeme()));
        self.indent(|visitor| {
            lhs.accept(visitor);
            rhs.accept(visitor);
        })
    }

    fn visit_unary_expr(&mut self, _expr: &Expr, op: &Token, operand: &Expr) {
        self.write_ln(&format!("Unary({})", op.lexeme()));
        self.indent(|visitor| {
            operand.accept(visitor);
        })
    }

    fn visit_literal_expr(&mut self, _expr: &Expr, token: &Token) {
        self.write_ln(&format!("Literal({})", token.lexeme()))
    }

    fn visit_variable_expr(&mut self, _expr: &Expr, name: &Token) {
        self.write_ln(&format!("Variable({})", name.lexeme()))
    }

    fn visit_grouping_expr(&mut self, _expr: &Expr, inner: &Expr) {
        self.write_ln("Grouping");
        self.indent(|visitor| {
            inner.accept(visitor);
        })
    }
}
