use std::path::{Path, PathBuf};

use lift_core::config::{ConfigError, LiftConfig};
use lift_parsers::walker::FileWalker;
use tracing::{debug, warn};

use super::Settings;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to get current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid ignore pattern: {0}")]
    IgnorePattern(String),

    #[error("path does not exist: {0}")]
    MissingPath(PathBuf),
}

pub fn current_dir() -> Result<PathBuf, CommandError> {
    std::env::current_dir().map_err(CommandError::CurrentDir)
}

/// `--config` file, else `lift.json` in `cwd`, then `--rule` overrides.
pub fn load_config(settings: &Settings<'_>, cwd: &Path) -> Result<LiftConfig, CommandError> {
    let mut config = match settings.config {
        Some(path) => LiftConfig::load(&cwd.join(path))?,
        None => LiftConfig::load_from_dir(cwd)?,
    };
    for &(rule, severity) in settings.overrides {
        config.set_rule(rule, severity);
    }
    Ok(config)
}

/// Every TypeScript file under `paths` (default: `cwd`), sorted and deduplicated.
pub fn collect_files(
    paths: &[PathBuf],
    cwd: &Path,
    config: &LiftConfig,
) -> Result<Vec<PathBuf>, CommandError> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![cwd.to_path_buf()]
    } else {
        paths.iter().map(|p| cwd.join(p)).collect()
    };

    let mut files = Vec::new();
    for root in roots {
        if !root.exists() {
            return Err(CommandError::MissingPath(root));
        }
        let walker = FileWalker::new(&root)
            .with_ignore_patterns(&config.ignore_patterns)
            .map_err(|e| CommandError::IgnorePattern(e.to_string()))?;
        let entries = walker.walk();
        if entries.is_empty() {
            warn!(path = %root.display(), "no TypeScript files found");
        }
        files.extend(entries.into_iter().map(|e| e.path));
    }
    files.sort();
    files.dedup();
    debug!(count = files.len(), "collected files");
    Ok(files)
}

/// Print formatter output, if any, with exactly one trailing newline.
pub fn emit(out: &str) {
    if !out.is_empty() {
        println!("{}", out.trim_end());
    }
}
