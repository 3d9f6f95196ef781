use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::span::{Position, Span};

/// Built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "avoid-type-literals")]
    AvoidTypeLiterals,
    #[serde(rename = "args-destructing")]
    ArgsDestructing,
}

impl RuleId {
    pub const ALL: [RuleId; 2] = [RuleId::AvoidTypeLiterals, RuleId::ArgsDestructing];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::AvoidTypeLiterals => "avoid-type-literals",
            RuleId::ArgsDestructing => "args-destructing",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownName::Rule(s.to_string()))
    }
}

/// How a rule's diagnostics are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Severity::Off),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(UnknownName::Severity(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownName {
    #[error("unknown rule: {0}")]
    Rule(String),

    #[error("unknown severity: {0} (expected off, warn, or error)")]
    Severity(String),
}

/// What a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    Destructuring,
    TypeLiteral,
    IntersectionLiteral,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Destructuring => "destructuring",
            MessageKind::TypeLiteral => "type-literal",
            MessageKind::IntersectionLiteral => "intersection-literal",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MessageKind::Destructuring => "Arguments destructuring disallowed",
            MessageKind::TypeLiteral => {
                "Unexpected type literal was provided. Replace it with type definition"
            }
            MessageKind::IntersectionLiteral => "Unexpected usage of intersection type literals",
        }
    }
}

/// Replace `span` of the original buffer with `replacement`. An empty span is an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub span: Span,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            span: Span::empty(offset),
            replacement: text.into(),
        }
    }

    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            replacement: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.span.is_empty()
    }

    /// Whether applying both edits to the same buffer is ambiguous.
    ///
    /// Two insertions never conflict. An insertion conflicts with a
    /// replacement only when it falls strictly inside the replaced range.
    pub fn conflicts_with(&self, other: &TextEdit) -> bool {
        match (self.is_insertion(), other.is_insertion()) {
            (true, true) => false,
            (true, false) => other.span.start < self.span.start && self.span.start < other.span.end,
            (false, true) => self.span.start < other.span.start && other.span.start < self.span.end,
            (false, false) => self.span.start < other.span.end && other.span.start < self.span.end,
        }
    }
}

/// An atomic group of edits: applied together or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub edits: Vec<TextEdit>,
}

impl Fix {
    pub fn new(edits: Vec<TextEdit>) -> Self {
        Self { edits }
    }
}

/// One reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: RuleId,
    pub message: MessageKind,
    pub span: Span,
    pub start: Position,
    pub end: Position,
    pub fix: Option<Fix>,
}

/// One-way sink for diagnostics.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
