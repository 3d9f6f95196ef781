use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use lift_core::config::LiftConfig;
use lift_core::fix::apply_fixes;
use lift_core::tree::SyntaxTree;
use lift_core::types::{Diagnostic, Severity};
use lift_parsers::treesitter::{ParseError, TreeSitterParser};

use crate::destructuring::ArgsDestructing;
use crate::registry::NameRegistry;
use crate::rule::{FileContext, Rule};
use crate::scope::{ModuleScope, ScopeIndex};
use crate::type_literals::AvoidTypeLiterals;
use crate::types::{CheckResult, FileFailure, FileFix, FixResult, RuleInfo, Violation};

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LintError {
    /// The error without its path, for reports already keyed by file.
    pub fn reason(&self) -> String {
        match self {
            LintError::Read { source, .. } => format!("failed to read: {source}"),
            LintError::Write { source, .. } => format!("failed to write: {source}"),
            LintError::Parse { source, .. } => source.to_string(),
        }
    }
}

/// Result of running the fix loop over one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    pub output: String,
    pub passes: u32,
    pub fixes_applied: usize,
    /// Diagnostics of the final output.
    pub remaining: Vec<Diagnostic>,
}

/// Runs the built-in rules over files.
pub struct LintEngine {
    config: LiftConfig,
    rules: Vec<Box<dyn Rule>>,
    scope: Box<dyn ScopeIndex>,
}

impl LintEngine {
    pub fn new(config: LiftConfig) -> Self {
        Self {
            config,
            rules: vec![Box::new(AvoidTypeLiterals), Box::new(ArgsDestructing)],
            scope: Box::new(ModuleScope),
        }
    }

    /// Replace the source of names that lifted declarations must avoid.
    pub fn with_scope(mut self, scope: Box<dyn ScopeIndex>) -> Self {
        self.scope = scope;
        self
    }

    pub fn rule_infos(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|rule| RuleInfo {
                id: rule.id(),
                description: rule.description().to_string(),
                severity: self.config.severity(rule.id()),
                fixable: true,
            })
            .collect()
    }

    /// Diagnostics of every enabled rule, rule by rule, each in document order.
    ///
    /// Every rule starts from a fresh registry seeded with the module's bound
    /// names; names one rule reserves are visible to its later fixes only.
    pub fn lint_tree(&self, tree: &SyntaxTree) -> Vec<Diagnostic> {
        let ctx = FileContext {
            tree,
            config: &self.config,
        };
        let bound = self.scope.bound_names(tree);
        let mut out = Vec::new();
        for rule in self.rules.iter().filter(|r| self.config.is_enabled(r.id())) {
            let mut names = NameRegistry::seeded(bound.iter().cloned());
            let before = out.len();
            for node in tree.preorder() {
                rule.check_node(&ctx, node, &mut names, &mut out);
            }
            debug!(rule = %rule.id(), matches = out.len() - before, "rule checked");
        }
        out
    }

    /// Parse and lint one source. `path` picks the grammar.
    pub fn lint_source(
        &self,
        parser: &mut TreeSitterParser,
        path: &Path,
        source: &str,
    ) -> Result<Vec<Diagnostic>, LintError> {
        let tree = parser
            .parse_file(path, source)
            .map_err(|source| LintError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(self.lint_tree(&tree))
    }

    pub fn check_source(&self, path: &Path, source: &str) -> Result<Vec<Diagnostic>, LintError> {
        self.lint_source(&mut TreeSitterParser::new(), path, source)
    }

    /// Lint, apply fixes, re-parse, repeat until no fix applies or
    /// `max_fix_passes` is reached.
    ///
    /// Every pass must parse: a fix that breaks the source fails the file
    /// and the caller keeps the original.
    pub fn fix_source(
        &self,
        parser: &mut TreeSitterParser,
        path: &Path,
        source: &str,
    ) -> Result<FixedSource, LintError> {
        let mut current = source.to_string();
        let mut passes = 0;
        let mut fixes_applied = 0;
        loop {
            let diagnostics = self.lint_source(parser, path, &current)?;
            if passes >= self.config.max_fix_passes {
                debug!(path = %path.display(), passes, "fix pass limit reached");
                return Ok(FixedSource {
                    output: current,
                    passes,
                    fixes_applied,
                    remaining: diagnostics,
                });
            }
            let outcome = apply_fixes(&current, &diagnostics);
            if outcome.applied == 0 {
                return Ok(FixedSource {
                    output: current,
                    passes,
                    fixes_applied,
                    remaining: diagnostics,
                });
            }
            passes += 1;
            fixes_applied += outcome.applied;
            debug!(
                path = %path.display(),
                pass = passes,
                applied = outcome.applied,
                skipped = outcome.skipped,
                "fix pass"
            );
            current = outcome.output;
        }
    }

    /// Lint `files` in parallel. Paths in the result are relative to `root`.
    pub fn check_files(&self, root: &Path, files: &[PathBuf]) -> CheckResult {
        let reports: Vec<(String, Result<Vec<Diagnostic>, LintError>)> = files
            .par_iter()
            .map_init(TreeSitterParser::new, |parser, path| {
                let result = read(path).and_then(|src| self.lint_source(parser, path, &src));
                (display_path(root, path), result)
            })
            .collect();

        let mut result = CheckResult::new("check");
        for (file, report) in reports {
            match report {
                Ok(diagnostics) => {
                    let violations = self.violations(&diagnostics, &file);
                    Self::partition_violations(violations, &mut result.errors, &mut result.warnings);
                }
                Err(e) => result.failures.push(FileFailure {
                    file: file.clone(),
                    error: e.reason(),
                }),
            }
            result.files_analyzed.push(file);
        }
        result.finish();
        info!(
            files = result.files_analyzed.len(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "check complete"
        );
        result
    }

    /// Fix `files` in parallel. With `dry_run` nothing is written and the
    /// fixed contents are returned instead.
    pub fn fix_files(&self, root: &Path, files: &[PathBuf], dry_run: bool) -> FixResult {
        let reports: Vec<(String, Result<FileFix, LintError>)> = files
            .par_iter()
            .map_init(TreeSitterParser::new, |parser, path| {
                let file = display_path(root, path);
                let result = self.fix_file(parser, path, &file, dry_run);
                (file, result)
            })
            .collect();

        let mut result = FixResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "fix".to_string(),
            dry_run,
            files: vec![],
            failures: vec![],
        };
        for (file, report) in reports {
            match report {
                Ok(fixed) => result.files.push(fixed),
                Err(e) => result.failures.push(FileFailure {
                    file,
                    error: e.reason(),
                }),
            }
        }
        info!(
            files = result.files.len(),
            changed = result.files.iter().filter(|f| f.changed).count(),
            failures = result.failures.len(),
            "fix complete"
        );
        result
    }

    fn fix_file(
        &self,
        parser: &mut TreeSitterParser,
        path: &Path,
        file: &str,
        dry_run: bool,
    ) -> Result<FileFix, LintError> {
        let source = read(path)?;
        let fixed = self.fix_source(parser, path, &source)?;
        let changed = fixed.output != source;
        if changed && !dry_run {
            std::fs::write(path, &fixed.output).map_err(|source| LintError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(FileFix {
            file: file.to_string(),
            changed,
            passes: fixed.passes,
            fixes_applied: fixed.fixes_applied,
            remaining: self.violations(&fixed.remaining, file),
            output: (dry_run && changed).then_some(fixed.output),
        })
    }

    fn violations(&self, diagnostics: &[Diagnostic], file: &str) -> Vec<Violation> {
        diagnostics
            .iter()
            .map(|d| Violation::from_diagnostic(d, self.config.severity(d.rule), file))
            .collect()
    }

    fn partition_violations(
        violations: Vec<Violation>,
        errors: &mut Vec<Violation>,
        warnings: &mut Vec<Violation>,
    ) {
        for v in violations {
            match v.severity {
                Severity::Error => errors.push(v),
                Severity::Warn => warnings.push(v),
                Severity::Off => {}
            }
        }
    }
}

fn read(path: &Path) -> Result<String, LintError> {
    std::fs::read_to_string(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
