//! Applying fixes to a source buffer.
//!
//! Every edit refers to the untouched buffer the diagnostics were computed
//! from. Fixes are taken in diagnostic order; a fix whose edits conflict
//! with an already accepted edit is skipped as a whole and left for the
//! next pass.

use tracing::debug;

use crate::types::{Diagnostic, TextEdit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub output: String,
    pub applied: usize,
    pub skipped: usize,
}

/// Apply every non-conflicting fix attached to `diagnostics` to `source`.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> FixOutcome {
    let mut accepted: Vec<(usize, &TextEdit)> = Vec::new();
    let mut applied = 0;
    let mut skipped = 0;

    for fix in diagnostics.iter().filter_map(|d| d.fix.as_ref()) {
        let valid = fix
            .edits
            .iter()
            .all(|e| source.get(e.span.start..e.span.end).is_some());
        let clashes = fix.edits.iter().enumerate().any(|(i, e)| {
            fix.edits[..i].iter().any(|prev| e.conflicts_with(prev))
                || accepted.iter().any(|(_, a)| e.conflicts_with(a))
        });
        if !valid || clashes {
            debug!(valid, "skipping fix");
            skipped += 1;
            continue;
        }
        for edit in &fix.edits {
            accepted.push((accepted.len(), edit));
        }
        applied += 1;
    }

    // Insertions sort ahead of a replacement starting at the same offset;
    // ties keep acceptance order.
    accepted.sort_by_key(|(seq, e)| (e.span.start, !e.is_insertion(), *seq));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for (_, edit) in accepted {
        output.push_str(&source[cursor..edit.span.start]);
        output.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    output.push_str(&source[cursor..]);

    FixOutcome {
        output,
        applied,
        skipped,
    }
}
