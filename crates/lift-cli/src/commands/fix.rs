use std::path::PathBuf;

use lift_core::types::Severity;
use lift_output::OutputFormatter;
use lift_rules::engine::LintEngine;

use super::common;
use super::Settings;

/// Run `lift fix`: apply fixes to every file until it is stable.
///
/// With `--dry-run` nothing is written. Exit codes follow `lift check`,
/// judged on the violations left after fixing.
pub fn run(
    formatter: &dyn OutputFormatter,
    settings: &Settings<'_>,
    paths: Vec<PathBuf>,
    dry_run: bool,
) -> i32 {
    let cwd = match common::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("lift fix: {}", e);
            return 2;
        }
    };
    let config = match common::load_config(settings, &cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("lift fix: {}", e);
            return 2;
        }
    };
    let files = match common::collect_files(&paths, &cwd, &config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("lift fix: {}", e);
            return 2;
        }
    };

    let engine = LintEngine::new(config);
    let result = engine.fix_files(&cwd, &files, dry_run);
    common::emit(&formatter.format_fix(&result));

    let remaining_errors = result
        .files
        .iter()
        .flat_map(|f| &f.remaining)
        .any(|v| v.severity == Severity::Error);
    if !result.failures.is_empty() {
        2
    } else if remaining_errors {
        1
    } else {
        0
    }
}
