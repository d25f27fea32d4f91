//! Unified-diff extraction for a single file.
//!
//! This is the parsing path of the diff model: given a complete
//! unified-diff document (as emitted by `git diff`, possibly covering
//! many files) and one target path, it locates that file's section,
//! classifies it, and reconstructs the full before/after content from
//! the patch alone.
//!
//! The parsing is deterministic and supports:
//! - Multi-file documents (`diff --git a/path b/path` section markers)
//! - Created files (from `/dev/null`) and deleted files (to `/dev/null`)
//! - Modified files, replayed hunk by hunk with proper hunk header
//!   parsing for accurate line numbers
//!
//! Degradation rules: a path absent from the document is an empty
//! result, not an error; a malformed hunk header is skipped without
//! cursor adjustment, which may drift later line numbering but never
//! aborts the parse.

mod headers;
mod reconstruct;


use crate::error::Result;
use crate::model::ParsedDiff;

/// Extract one file's before/after content from a unified-diff document.
///
/// # Arguments
///
/// * `diff_text` - Complete unified-diff document, possibly many files
/// * `file_path` - Target path in the relative form used inside diff
///   headers
///
/// # Returns
///
/// * `Ok(ParsedDiff)` - Reconstructed content; empty on both sides when
///   the path does not appear in the document
pub fn extract_file_diff(diff_text: &str, file_path: &str) -> Result<ParsedDiff> {
    Ok(reconstruct::reconstruct_file(diff_text, file_path))
}
