//! Configuration file loading for lift.
//!
//! Reads `lift.json` and provides typed access to all settings.
//! Falls back to defaults when the config file is missing; a present but
//! malformed file is an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{RuleId, Severity};

pub const CONFIG_FILE_NAME: &str = "lift.json";

/// Top-level lift configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftConfig {
    #[serde(default)]
    pub preset: Preset,
    /// Per-rule overrides on top of the preset.
    #[serde(default)]
    pub rules: BTreeMap<RuleId, Severity>,
    /// Parameter name introduced by the destructuring fix.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub unclassified: UnclassifiedPolicy,
    #[serde(default = "default_max_fix_passes")]
    pub max_fix_passes: u32,
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Packaged rule → severity mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Recommended,
    None,
}

impl Preset {
    pub fn severity(&self, _rule: RuleId) -> Severity {
        match self {
            Preset::Recommended => Severity::Error,
            Preset::None => Severity::Off,
        }
    }
}

/// What to do with a type literal whose position has no naming rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedPolicy {
    /// Use an empty postfix and still attach a fix.
    #[default]
    Neutral,
    /// Report the literal without a fix.
    Skip,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn default_placeholder() -> String {
    "payload".to_string()
}
fn default_max_fix_passes() -> u32 {
    10
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            rules: BTreeMap::new(),
            placeholder: default_placeholder(),
            unclassified: UnclassifiedPolicy::default(),
            max_fix_passes: default_max_fix_passes(),
            ignore_patterns: vec![],
        }
    }
}

impl LiftConfig {
    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `lift.json` from `dir`, or defaults when there is none.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Effective severity: explicit override, else the preset's.
    pub fn severity(&self, rule: RuleId) -> Severity {
        self.rules
            .get(&rule)
            .copied()
            .unwrap_or_else(|| self.preset.severity(rule))
    }

    pub fn set_rule(&mut self, rule: RuleId, severity: Severity) {
        self.rules.insert(rule, severity);
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        self.severity(rule) != Severity::Off
    }
}
