pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod source;

use diagnostic::*;
use lexing::*;
use log::debug;
use parsing::*;
pub use source::*;
use std::rc::Rc;

pub struct Options {
    pub trace: TraceMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            trace: TraceMode::Stdout,
        }
    }
}

pub fn run(source: Source) -> Result<Program, ()> {
    run_with_reporter(source, DefaultReporter::new(), Options::default())
}

/// Lexes and parses `source`, handing the first diagnostic (if any) to `reporter`
pub fn run_with_reporter(
    source: Source,
    reporter: Rc<dyn Reporter>,
    options: Options,
) -> Result<Program, ()> {
    compile(source, options).map_err(|diagnostic| reporter.report(diagnostic))
}

pub fn compile(source: Source, options: Options) -> DiagnosticResult<Program> {
    debug!(target: "driver", "Lexing {}", source.name);
    let lexed = Lexer::new(source).lex()?;
    debug!(target: "driver", "Lexed {} tokens", lexed.tokens.len());

    let mut parser = Parser::new(&lexed, options.trace);
    let program = parser.parse()?;
    debug!(target: "driver", "Recognized program {}", program.name.lexeme());

    Ok(program)
}
