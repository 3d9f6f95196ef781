//! Core types, syntax arena, and configuration for lift.
//!
//! This crate provides the foundational data structures used across all lift crates:
//! - [`tree`]: The arena-backed [`SyntaxTree`](tree::SyntaxTree) the rules read
//! - [`span`]: Byte spans and the line index used for locations
//! - [`types`]: Rule ids, severities, diagnostics, and fixes
//! - [`fix`]: Applying fixes to the untouched source buffer
//! - [`config`]: Configuration loading from `lift.json`

pub mod config;
pub mod fix;
pub mod span;
pub mod tree;
pub mod types;
