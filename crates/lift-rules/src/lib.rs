//! Rules and lint engine for lift.
//!
//! Two rules share one detect → classify → patch pipeline:
//! - `avoid-type-literals`: inline object types outside a named type
//!   declaration are lifted into an `interface`; intersections of two or
//!   more literals are merged into one literal
//! - `args-destructing`: an object-destructuring parameter is replaced with
//!   a placeholder and re-destructured in the function body
//!
//! [`engine::LintEngine`] drives the rules over a parsed file, applies
//! fixes until the source is stable, and fans out over many files.

pub mod types;
pub mod rule;
pub mod scope;
pub mod registry;
pub mod destructuring;
pub mod type_literals;
pub mod engine;
