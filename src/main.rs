use micropascal::diagnostic::{DefaultReporter, PrettyReporter, Reporter};
use micropascal::parsing::{ASTPrinter, DotWriter, TraceMode};
use micropascal::Options;
use std::process;
use std::rc::Rc;

struct Args {
    path: String,
    quiet: bool,
    pretty: bool,
    print_ast: bool,
    dot: Option<String>,
}

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} [--quiet] [--pretty] [--ast] [--dot <file>] <file.pas>", program_name);
    eprintln!();
    eprintln!("  --quiet       do not print the grammar rule trace");
    eprintln!("  --pretty      show errors with the offending source line");
    eprintln!("  --ast         print the syntax tree after a successful parse");
    eprintln!("  --dot <file>  write the syntax tree as a Graphviz graph");
    process::exit(1);
}

fn parse_args() -> Args {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| String::from("micropascal"));

    let mut path = None;
    let mut quiet = false;
    let mut pretty = false;
    let mut print_ast = false;
    let mut dot = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--quiet" => quiet = true,
            "--pretty" => pretty = true,
            "--ast" => print_ast = true,
            "--dot" => match args.next() {
                Some(file) => dot = Some(file),
                None => usage(&program_name),
            },
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown option '{}'", flag);
                usage(&program_name)
            }
            _ if path.is_none() => path = Some(arg.clone()),
            _ => usage(&program_name),
        }
    }

    match path {
        Some(path) => Args {
            path,
            quiet,
            pretty,
            print_ast,
            dot,
        },
        None => usage(&program_name),
    }
}

fn main() {
    env_logger::init();

    let args = parse_args();

    let source = match micropascal::file(&args.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not open '{}': {}", args.path, error);
            process::exit(1);
        }
    };

    let reporter: Rc<dyn Reporter> = if args.pretty {
        PrettyReporter::new()
    } else {
        DefaultReporter::new()
    };
    let options = Options {
        trace: if args.quiet {
            TraceMode::Off
        } else {
            TraceMode::Stdout
        },
    };

    let program = match micropascal::run_with_reporter(source, reporter, options) {
        Ok(program) => program,
        Err(()) => process::exit(1),
    };

    if args.print_ast {
        ASTPrinter::new().print(&program);
    }

    if let Some(path) = args.dot {
        if let Err(error) = DotWriter::write(&program, &path) {
            eprintln!("Error: could not write '{}': {}", path, error);
            process::exit(1);
        }
    }
}
