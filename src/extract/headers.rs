//! Header-line helpers for unified-diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Hunk header grammar: `@@ -<oldStart>[,<oldLen>] +<newStart>[,<newLen>] @@`.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,\d+)? \+(\d+)(?:,\d+)? @@").expect("Invalid hunk header regex")
});

/// Build the exact `diff --git` marker line for a file path.
///
/// The marker only matches a file diffed against itself under the
/// conventional `a/`/`b/` prefixes; renames use differing paths and are
/// treated as "not present in this diff".
pub(super) fn file_marker(file_path: &str) -> String {
    format!("diff --git a/{file_path} b/{file_path}")
}

/// Parse the value of a `--- ` or `+++ ` file header line.
///
/// Returns `None` for `/dev/null`, which signals that the file does not
/// exist on that side. The conventional `a/`/`b/` prefix is stripped so
/// the result is the repo-relative path.
pub(super) fn parse_file_header(value: &str) -> Option<String> {
    if value == "/dev/null" {
        return None;
    }
    let path = value
        .strip_prefix("a/")
        .or_else(|| value.strip_prefix("b/"))
        .unwrap_or(value);
    Some(path.to_string())
}

/// Parse a hunk header line.
///
/// Format: `@@ -old_start,old_len +new_start,new_len @@` with both
/// lengths optional, possibly followed by section context after the
/// closing `@@`.
///
/// Returns `(old_start, new_start)` or `None` if the line does not match
/// the grammar.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize)> {
    let captures = HUNK_HEADER_REGEX.captures(line)?;
    let old_start = captures[1].parse().ok()?;
    let new_start = captures[2].parse().ok()?;
    Some((old_start, new_start))
}
