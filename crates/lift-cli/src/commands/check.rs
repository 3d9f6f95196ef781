use std::path::PathBuf;

use lift_output::OutputFormatter;
use lift_rules::engine::LintEngine;

use super::common;
use super::Settings;

/// Run `lift check`: report violations without touching files.
///
/// Exit codes: 0 clean (warnings allowed), 1 error-severity violations,
/// 2 when the command or any file could not be processed.
pub fn run(formatter: &dyn OutputFormatter, settings: &Settings<'_>, paths: Vec<PathBuf>) -> i32 {
    let cwd = match common::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("lift check: {}", e);
            return 2;
        }
    };
    let config = match common::load_config(settings, &cwd) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("lift check: {}", e);
            return 2;
        }
    };
    let files = match common::collect_files(&paths, &cwd, &config) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("lift check: {}", e);
            return 2;
        }
    };

    let engine = LintEngine::new(config);
    let result = engine.check_files(&cwd, &files);
    common::emit(&formatter.format_check(&result));

    if !result.failures.is_empty() {
        2
    } else if !result.errors.is_empty() {
        1
    } else {
        0
    }
}
