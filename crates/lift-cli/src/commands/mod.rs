pub mod check;
pub mod common;
pub mod fix;
pub mod rules;

use std::path::Path;

use lift_core::types::{RuleId, Severity};

/// Options shared by every subcommand.
pub struct Settings<'a> {
    pub config: Option<&'a Path>,
    pub overrides: &'a [(RuleId, Severity)],
}
