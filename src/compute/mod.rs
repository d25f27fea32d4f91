//! Live diff computation between two in-memory texts.
//!
//! This is the synthesis path of the diff model: it produces a diff from
//! raw text rather than parsing one, so it needs no version-control tool
//! behind it. Three stages run in sequence:
//!
//! - `lcs`: longest-common-subsequence prefix table over the line
//!   sequences
//! - `sequence`: backtracking into an ordered `unchanged`/`added`/
//!   `removed` change list with line numbers
//! - `hunks`: grouping into review-sized hunks with bounded context
//!
//! The computation is deterministic, including the order add/remove runs
//! interleave in on LCS ties.

mod hunks;
mod lcs;
mod sequence;

#[cfg(test)]
mod tests;

use crate::model::{DiffHunk, DiffLine};

/// Number of unchanged context lines shown around a change by default.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Compute the ordered per-line change list between two texts.
///
/// Lines are compared by exact string equality. The result covers both
/// texts top to bottom: every input line appears exactly once, tagged
/// `unchanged`, `added`, or `removed` and carrying its 1-based line
/// number on whichever side it exists.
pub fn diff_changes(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old_text.lines().collect();
    let new_lines: Vec<&str> = new_text.lines().collect();

    let table = lcs::lcs_table(&old_lines, &new_lines);
    sequence::change_sequence(&old_lines, &new_lines, &table)
}

/// Compute a line-level diff between two texts, grouped into hunks.
///
/// `context_lines` bounds the window of unchanged lines kept around each
/// change (see [`DEFAULT_CONTEXT_LINES`]). Identical texts produce an
/// empty result. Gaps between hunks are not materialized; rendering the
/// omission is the caller's concern.
pub fn diff_hunks(old_text: &str, new_text: &str, context_lines: usize) -> Vec<DiffHunk> {
    let changes = diff_changes(old_text, new_text);
    hunks::group_hunks(&changes, context_lines)
}
