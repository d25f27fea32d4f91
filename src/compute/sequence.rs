//! Change sequencing by LCS backtracking.

use crate::model::DiffLine;

/// Backtrack the LCS table into an ordered list of per-line changes.
///
/// Walks from `(m, n)` toward `(0, 0)`, emitting one [`DiffLine`] per
/// step with 1-based line numbers for whichever side the line exists on.
/// Records come out newest-first during the walk and are reversed before
/// returning, so the result reads top to bottom.
///
/// When both directions yield equal LCS length, the `>=` comparison takes
/// the added branch first: a divergence is represented as an insertion
/// before a deletion. Downstream consumers depend on that exact ordering
/// of interleaved add/remove runs, so the tie-break must not change.
pub(super) fn change_sequence(
    old_lines: &[&str],
    new_lines: &[&str],
    table: &[Vec<usize>],
) -> Vec<DiffLine> {
    let mut changes = Vec::new();
    let mut i = old_lines.len();
    let mut j = new_lines.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_lines[i - 1] == new_lines[j - 1] {
            changes.push(DiffLine::unchanged(old_lines[i - 1], i, j));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            changes.push(DiffLine::added(new_lines[j - 1], j));
            j -= 1;
        } else {
            changes.push(DiffLine::removed(old_lines[i - 1], i));
            i -= 1;
        }
    }

    changes.reverse();
    changes
}
