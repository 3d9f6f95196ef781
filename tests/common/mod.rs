/// Shared test helpers for all lift integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use lift_core::config::LiftConfig;
use lift_parsers::treesitter::TreeSitterParser;
use lift_rules::engine::{FixedSource, LintEngine};
use tempfile::TempDir;

/// Create a project directory from a set of source files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn create_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new().prefix("lift-it").tempdir().unwrap();
    let root = dir.path();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    let project_root = root.to_path_buf();
    (dir, project_root)
}

/// Run the full fix loop over `source` with the default configuration.
#[allow(dead_code)]
pub fn fix(source: &str) -> FixedSource {
    fix_with(source, LiftConfig::default())
}

#[allow(dead_code)]
pub fn fix_with(source: &str, config: LiftConfig) -> FixedSource {
    LintEngine::new(config)
        .fix_source(&mut TreeSitterParser::new(), Path::new("input.ts"), source)
        .expect("source should parse on every pass")
}

/// Get path to compiled lift binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn lift_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("lift");
    if path.exists() {
        return path;
    }
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let status = Command::new("cargo")
        .args(["build", "-p", "lift-cli"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build lift");
    assert!(status.success(), "Failed to build lift binary");
    path
}
