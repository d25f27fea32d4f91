//! Grouping of change lists into context-bounded hunks.

use crate::model::{DiffHunk, DiffLine, DiffLineKind};

/// Group an ordered change list into review-sized hunks.
///
/// Scans the list once, opening a hunk at each change that is either the
/// first one seen or further than `2 * context_lines` entries from the
/// previous change. An open hunk keeps absorbing entries (changed or not)
/// until `context_lines` entries past the most recent change. Two changes
/// closer together than the gap threshold therefore share one hunk, with
/// the connecting unchanged lines shown as context; beyond it, separate
/// hunks are produced and the gap is not materialized.
///
/// With `context_lines == 0` every changed line gets its own hunk and no
/// context is included. A change list with no changes yields no hunks.
pub(super) fn group_hunks(changes: &[DiffLine], context_lines: usize) -> Vec<DiffHunk> {
    let mut hunks = Vec::new();
    let mut current: Option<DiffHunk> = None;
    // None until the first change is seen.
    let mut last_change_index: Option<usize> = None;

    for (index, entry) in changes.iter().enumerate() {
        if entry.kind.is_change() {
            let gap_exceeded = match last_change_index {
                Some(last) => index - last > 2 * context_lines,
                None => true,
            };
            if current.is_none() || gap_exceeded {
                if let Some(hunk) = current.take() {
                    hunks.push(hunk);
                }
                current = Some(open_hunk(changes, index, context_lines));
            }
            last_change_index = Some(index);
        }

        if let (Some(hunk), Some(last)) = (current.as_mut(), last_change_index)
            && index <= last + context_lines
        {
            append_line(hunk, entry);
        }
    }

    if let Some(hunk) = current {
        hunks.push(hunk);
    }

    hunks
}

/// Open a hunk for the change at `index`, pre-populated with up to
/// `context_lines` preceding unchanged entries.
///
/// The starting bounds are seeded from the first old/new line-number
/// fields found at or after the hunk's starting position, falling back to
/// the 1-based position itself when a side carries no numbers at all
/// (e.g. a pure-insert run has no old-side numbers).
fn open_hunk(changes: &[DiffLine], index: usize, context_lines: usize) -> DiffHunk {
    let start_index = index.saturating_sub(context_lines);

    let start_line = changes[start_index..]
        .iter()
        .find_map(|entry| entry.old_line_number)
        .unwrap_or(start_index + 1);
    let new_start_line = changes[start_index..]
        .iter()
        .find_map(|entry| entry.new_line_number)
        .unwrap_or(start_index + 1);

    let mut hunk = DiffHunk {
        start_line,
        end_line: start_line,
        new_start_line,
        new_end_line: new_start_line,
        lines: Vec::new(),
    };

    // Context before the change.
    for entry in &changes[start_index..index] {
        if entry.kind == DiffLineKind::Unchanged {
            hunk.lines.push(entry.clone());
        }
    }

    hunk
}

/// Append an entry to an open hunk, widening the end bounds from
/// whichever line-number fields the entry carries.
///
/// Bounds are only overwritten when a field is present, so unchanged
/// context extends the visible range without owning a change.
fn append_line(hunk: &mut DiffHunk, entry: &DiffLine) {
    if let Some(old_line) = entry.old_line_number {
        hunk.end_line = old_line;
    }
    if let Some(new_line) = entry.new_line_number {
        hunk.new_end_line = new_line;
    }
    hunk.lines.push(entry.clone());
}
