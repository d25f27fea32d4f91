//! Tests for live diff computation.

use super::{DEFAULT_CONTEXT_LINES, diff_changes, diff_hunks};
use crate::model::DiffLineKind;

/// Diffing a text against itself yields zero hunks.
#[test]
fn test_identity_yields_no_hunks() {
    let text = "fn main() {\n    println!(\"hello\");\n}\n";
    let hunks = diff_hunks(text, text, DEFAULT_CONTEXT_LINES);
    assert!(hunks.is_empty());
}

/// Both inputs empty is a valid degenerate case.
#[test]
fn test_empty_inputs_yield_no_hunks() {
    assert!(diff_hunks("", "", DEFAULT_CONTEXT_LINES).is_empty());
    assert!(diff_changes("", "").is_empty());
}

/// The end-to-end scenario: one replaced line with one context line on
/// each side produces exactly one hunk with exact bounds.
#[test]
fn test_single_replacement_with_context() {
    let hunks = diff_hunks("a\nb\nc", "a\nx\nc", 1);

    assert_eq!(hunks.len(), 1);
    let hunk = &hunks[0];

    let kinds: Vec<_> = hunk.lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiffLineKind::Unchanged,
            DiffLineKind::Removed,
            DiffLineKind::Added,
            DiffLineKind::Unchanged,
        ]
    );
    let contents: Vec<_> = hunk.lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "x", "c"]);

    assert_eq!(hunk.start_line, 1);
    assert_eq!(hunk.end_line, 3);
    assert_eq!(hunk.new_start_line, 1);
    assert_eq!(hunk.new_end_line, 3);
}

/// On LCS ties the sequencer takes the added branch first, which fixes
/// the order of interleaved add/remove runs. The sequence for swapping
/// two lines is deterministic and must not change.
#[test]
fn test_tie_break_prefers_added_branch() {
    let changes = diff_changes("a\nb", "b\na");

    assert_eq!(changes.len(), 3);

    assert_eq!(changes[0].kind, DiffLineKind::Removed);
    assert_eq!(changes[0].content, "a");
    assert_eq!(changes[0].old_line_number, Some(1));
    assert_eq!(changes[0].new_line_number, None);

    assert_eq!(changes[1].kind, DiffLineKind::Unchanged);
    assert_eq!(changes[1].content, "b");
    assert_eq!(changes[1].old_line_number, Some(2));
    assert_eq!(changes[1].new_line_number, Some(1));

    assert_eq!(changes[2].kind, DiffLineKind::Added);
    assert_eq!(changes[2].content, "a");
    assert_eq!(changes[2].old_line_number, None);
    assert_eq!(changes[2].new_line_number, Some(2));
}

/// The ordered change list reproduces both inputs: unchanged+removed
/// lines are the old text, unchanged+added lines are the new text.
#[test]
fn test_change_list_round_trips_both_sides() {
    let old = "use std::fs;\n\nfn read() {}\nfn write() {}\nfn close() {}";
    let new = "use std::fs;\nuse std::io;\n\nfn read() {}\nfn flush() {}\nfn close() {}";
    let changes = diff_changes(old, new);

    let old_side: Vec<&str> = changes
        .iter()
        .filter(|c| c.kind != DiffLineKind::Added)
        .map(|c| c.content.as_str())
        .collect();
    let new_side: Vec<&str> = changes
        .iter()
        .filter(|c| c.kind != DiffLineKind::Removed)
        .map(|c| c.content.as_str())
        .collect();

    assert_eq!(old_side, old.lines().collect::<Vec<_>>());
    assert_eq!(new_side, new.lines().collect::<Vec<_>>());
}

/// Line numbers in the change list count each side independently from 1.
#[test]
fn test_change_list_line_numbers_are_one_based_per_side() {
    let changes = diff_changes("a\nb\nc", "a\nc\nd");

    let old_numbers: Vec<_> = changes.iter().filter_map(|c| c.old_line_number).collect();
    let new_numbers: Vec<_> = changes.iter().filter_map(|c| c.new_line_number).collect();
    assert_eq!(old_numbers, vec![1, 2, 3]);
    assert_eq!(new_numbers, vec![1, 2, 3]);
}

/// With zero context every hunk holds only changed entries.
#[test]
fn test_zero_context_hunks_hold_only_changes() {
    let hunks = diff_hunks("a\nb\nc", "a\nx\nc", 0);

    assert!(!hunks.is_empty());
    for hunk in &hunks {
        assert!(hunk.lines.iter().all(|l| l.kind.is_change()));
    }
    // One hunk per changed line: split happens on any gap at all.
    assert_eq!(hunks.len(), 2);
    assert_eq!(hunks[0].lines[0].content, "b");
    assert_eq!(hunks[1].lines[0].content, "x");
}

/// Changes within the 2x-context gap fold into one hunk with the
/// connecting unchanged lines as context.
#[test]
fn test_nearby_changes_merge_into_one_hunk() {
    let old = "a\nb\nc\nd\ne";
    let new = "a\nB\nc\nD\ne";
    let hunks = diff_hunks(old, new, 1);

    assert_eq!(hunks.len(), 1);
    let contents: Vec<_> = hunks[0].lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "B", "c", "d", "D", "e"]);
    assert_eq!(hunks[0].start_line, 1);
    assert_eq!(hunks[0].end_line, 5);
    assert_eq!(hunks[0].new_start_line, 1);
    assert_eq!(hunks[0].new_end_line, 5);
}

/// Changes further apart than the 2x-context gap produce separate hunks
/// with nothing materialized in between.
#[test]
fn test_distant_changes_split_into_separate_hunks() {
    let old = "a\nb\nc\nd\ne\nf\ng";
    let new = "a\nB\nc\nd\ne\nF\ng";
    let hunks = diff_hunks(old, new, 1);

    assert_eq!(hunks.len(), 2);

    let first: Vec<_> = hunks[0].lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(first, vec!["a", "b", "B", "c"]);
    assert_eq!(hunks[0].start_line, 1);
    assert_eq!(hunks[0].end_line, 3);

    let second: Vec<_> = hunks[1].lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(second, vec!["e", "f", "F", "g"]);
    assert_eq!(hunks[1].start_line, 5);
    assert_eq!(hunks[1].end_line, 7);
    assert_eq!(hunks[1].new_start_line, 5);
    assert_eq!(hunks[1].new_end_line, 7);
}

/// An empty old text yields a single hunk covering the whole new side,
/// with the old-side start falling back to the hunk position.
#[test]
fn test_insert_into_empty_text() {
    let hunks = diff_hunks("", "x\ny", DEFAULT_CONTEXT_LINES);

    assert_eq!(hunks.len(), 1);
    let hunk = &hunks[0];
    assert_eq!(hunk.lines.len(), 2);
    assert!(hunk.lines.iter().all(|l| l.kind == DiffLineKind::Added));
    assert_eq!(hunk.start_line, 1);
    assert_eq!(hunk.new_start_line, 1);
    assert_eq!(hunk.new_end_line, 2);
}

/// The symmetric case: an empty new text yields one all-removed hunk.
#[test]
fn test_delete_to_empty_text() {
    let hunks = diff_hunks("x\ny", "", DEFAULT_CONTEXT_LINES);

    assert_eq!(hunks.len(), 1);
    let hunk = &hunks[0];
    assert_eq!(hunk.lines.len(), 2);
    assert!(hunk.lines.iter().all(|l| l.kind == DiffLineKind::Removed));
    assert_eq!(hunk.start_line, 1);
    assert_eq!(hunk.end_line, 2);
}

/// Context is truncated at the text boundaries rather than padded.
#[test]
fn test_context_truncated_at_boundaries() {
    let old = "a\nb\nc";
    let new = "X\nb\nc";
    let hunks = diff_hunks(old, new, DEFAULT_CONTEXT_LINES);

    assert_eq!(hunks.len(), 1);
    let contents: Vec<_> = hunks[0].lines.iter().map(|l| l.content.as_str()).collect();
    // No context exists above the first line; all of it fits below.
    assert_eq!(contents, vec!["a", "X", "b", "c"]);
}

/// A trailing change keeps at most `context_lines` of leading context.
#[test]
fn test_leading_context_is_bounded() {
    let old = "a\nb\nc\nd\ne\nf";
    let new = "a\nb\nc\nd\ne\nF";
    let hunks = diff_hunks(old, new, 2);

    assert_eq!(hunks.len(), 1);
    let contents: Vec<_> = hunks[0].lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["d", "e", "f", "F"]);
    assert_eq!(hunks[0].start_line, 4);
    assert_eq!(hunks[0].end_line, 6);
    assert_eq!(hunks[0].new_start_line, 4);
    assert_eq!(hunks[0].new_end_line, 6);
}
