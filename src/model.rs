//! Shared data model for both diff paths.
//!
//! The synthesis path (compute) and the parsing path (extract) speak the
//! same per-line vocabulary: a [`DiffLine`] is one line of output tagged
//! with how it changed and where it sits in the old and/or new file. All
//! types here are plain immutable values, serialized with the camelCase
//! field names the rendering layer expects.

use serde::{Deserialize, Serialize};

/// How a single line changed between the old and new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    /// Line present in both texts.
    Unchanged,
    /// Line present only in the new text.
    Added,
    /// Line present only in the old text.
    Removed,
}

impl DiffLineKind {
    /// Whether this kind represents an actual change (not context).
    pub fn is_change(self) -> bool {
        matches!(self, DiffLineKind::Added | DiffLineKind::Removed)
    }
}

/// A single line of diff output.
///
/// `old_line_number` is present for `unchanged`/`removed` lines,
/// `new_line_number` for `unchanged`/`added`. Both are 1-based. Content
/// is the raw line text with no diff-marker prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// How the line changed.
    pub kind: DiffLineKind,
    /// The line text, without any `+`/`-`/space marker.
    pub content: String,
    /// 1-based position in the old text, when the line exists there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line_number: Option<usize>,
    /// 1-based position in the new text, when the line exists there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line_number: Option<usize>,
}

impl DiffLine {
    /// A line present in both texts.
    pub fn unchanged(content: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        DiffLine {
            kind: DiffLineKind::Unchanged,
            content: content.into(),
            old_line_number: Some(old_line),
            new_line_number: Some(new_line),
        }
    }

    /// A line present only in the new text.
    pub fn added(content: impl Into<String>, new_line: usize) -> Self {
        DiffLine {
            kind: DiffLineKind::Added,
            content: content.into(),
            old_line_number: None,
            new_line_number: Some(new_line),
        }
    }

    /// A line present only in the old text.
    pub fn removed(content: impl Into<String>, old_line: usize) -> Self {
        DiffLine {
            kind: DiffLineKind::Removed,
            content: content.into(),
            old_line_number: Some(old_line),
            new_line_number: None,
        }
    }
}

/// A contiguous block of changes plus its surrounding context lines.
///
/// `start_line`/`end_line` bound the old-side range the hunk covers,
/// `new_start_line`/`new_end_line` the new-side range. `lines` preserves
/// the original textual order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffHunk {
    /// First old-side line covered by the hunk (1-based).
    pub start_line: usize,
    /// Last old-side line covered by the hunk (1-based).
    pub end_line: usize,
    /// First new-side line covered by the hunk (1-based).
    pub new_start_line: usize,
    /// Last new-side line covered by the hunk (1-based).
    pub new_end_line: usize,
    /// The hunk's lines, in textual order.
    pub lines: Vec<DiffLine>,
}

/// Full before/after content of one file, reconstructed from a
/// unified-diff document.
///
/// A `None` file name means the file does not exist on that side:
/// `old_file_name == None` is a created file, `new_file_name == None` a
/// deleted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDiff {
    /// The reconstructed old file content.
    pub old_content: String,
    /// The reconstructed new file content.
    pub new_content: String,
    /// Old-side file path, absent when the file was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_file_name: Option<String>,
    /// New-side file path, absent when the file was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_file_name: Option<String>,
}
