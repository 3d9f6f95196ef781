use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lift_core::types::{RuleId, Severity};

#[derive(Parser, Debug)]
#[command(
    name = "lift",
    version,
    about = "Lift inline type literals and destructured parameters out of TypeScript"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file (default: ./lift.json)
    #[arg(long, global = true, env = "LIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override a rule's severity, e.g. `--rule args-destructing=off`
    #[arg(long = "rule", global = true, value_name = "ID=SEVERITY", value_parser = parse_rule_override)]
    pub rules: Vec<(RuleId, Severity)>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Report violations
    Check {
        /// Files or directories to check (default: .)
        paths: Vec<PathBuf>,
    },

    /// Apply fixes until the sources are stable
    Fix {
        /// Files or directories to fix (default: .)
        paths: Vec<PathBuf>,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List rules and their effective severity
    Rules,
}

pub(crate) fn parse_rule_override(s: &str) -> Result<(RuleId, Severity), String> {
    let (rule, severity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=SEVERITY, got '{s}'"))?;
    let rule = rule.trim().parse::<RuleId>().map_err(|e| e.to_string())?;
    let severity = severity.trim().parse::<Severity>().map_err(|e| e.to_string())?;
    Ok((rule, severity))
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
