use serde::{Deserialize, Serialize};

use lift_core::types::{Diagnostic, MessageKind, RuleId, Severity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub files_analyzed: Vec<String>,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
    pub failures: Vec<FileFailure>,
}

impl CheckResult {
    pub fn new(command: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            files_analyzed: vec![],
            errors: vec![],
            warnings: vec![],
            failures: vec![],
        }
    }

    /// Recompute `status` from the collected violations.
    pub fn finish(&mut self) {
        self.status = if !self.errors.is_empty() || !self.failures.is_empty() {
            "error"
        } else if !self.warnings.is_empty() {
            "warning"
        } else {
            "ok"
        }
        .to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: RuleId,
    pub message_id: MessageKind,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub fixable: bool,
}

impl Violation {
    pub fn from_diagnostic(diagnostic: &Diagnostic, severity: Severity, file: &str) -> Self {
        Self {
            rule: diagnostic.rule,
            message_id: diagnostic.message,
            severity,
            message: diagnostic.message.message().to_string(),
            file: file.to_string(),
            line: diagnostic.start.line,
            column: diagnostic.start.column,
            end_line: diagnostic.end.line,
            end_column: diagnostic.end.column,
            fixable: diagnostic.fix.is_some(),
        }
    }
}

/// A file that could not be read, parsed, or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub file: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixResult {
    pub version: String,
    pub command: String,
    pub dry_run: bool,
    pub files: Vec<FileFix>,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFix {
    pub file: String,
    pub changed: bool,
    pub passes: u32,
    pub fixes_applied: usize,
    /// Violations still present after the last pass.
    pub remaining: Vec<Violation>,
    /// Fixed contents, only carried on dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: RuleId,
    pub description: String,
    pub severity: Severity,
    pub fixable: bool,
}
