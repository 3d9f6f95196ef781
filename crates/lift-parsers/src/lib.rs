//! Parsing and file discovery for lift.
//!
//! - [`treesitter`]: tree-sitter-typescript parsing lowered into a
//!   [`SyntaxTree`](lift_core::tree::SyntaxTree)
//! - [`walker`]: source file discovery honoring ignore files and globs

pub mod treesitter;
pub mod walker;
