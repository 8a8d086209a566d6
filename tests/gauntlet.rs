use micropascal::Options;
use micropascal::parsing::TraceMode;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::*;

#[test]
fn gauntlet() -> TestResult {
    for path in programs("tests/micropascal")? {
        let diagnostics = run_file(&path)?;
        if !diagnostics.is_empty() {
            return Err(format!(
                "{}: expected no diagnostics, got: {}",
                path.display(),
                diagnostics.diagnostic_string()
            ));
        }
    }
    Ok(())
}

#[test]
fn gauntlet_errors() -> TestResult {
    for path in programs("tests/micropascal/errors")? {
        let expected = fs::read_to_string(path.with_extension("err")).map_err(|e| e.to_string())?;
        let diagnostics = run_file(&path)?;
        let got: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        println!("{}", path.display());
        assert_slices_equal(
            "diagnostics",
            &got,
            &[String::from(expected.trim_end())],
            |lhs, rhs| lhs == rhs,
            &diagnostics.diagnostic_string(),
        )?;
    }
    Ok(())
}

fn programs(dir: &str) -> Result<Vec<PathBuf>, String> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir);
    let entries = fs::read_dir(&dir).map_err(|e| e.to_string())?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "pas"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(format!("No programs found in {}", dir.display()));
    }
    Ok(paths)
}

fn run_file(path: &Path) -> Result<Vec<Diagnostic>, String> {
    let (reporter, mut diagnostics) = TestReporter::new();
    let source = micropascal::file(&path.to_string_lossy()).map_err(|e| e.to_string())?;
    let options = Options {
        trace: TraceMode::Off,
    };
    let _ = micropascal::run_with_reporter(source, reporter, options);
    Ok(diagnostics.unwrap())
}
