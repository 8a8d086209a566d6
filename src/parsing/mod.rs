mod ast;
mod ast_printer;
mod cursor;
mod declarations;
mod dot;
mod parser;
mod trace;

pub use ast::{
    Block, Expr, ExprKind, ExprVisitor, Program, Stmt, StmtKind, StmtVisitor, VariableDecl,
};
pub use ast_printer::ASTPrinter;
pub use cursor::Cursor;
pub use dot::DotWriter;
pub use parser::Parser;
pub use trace::{Rule, Trace, TraceMode};
