//! File-section location and content reconstruction.

use crate::model::ParsedDiff;

use super::headers::{file_marker, parse_file_header, parse_hunk_header};

/// Reconstruct one file's before/after content from a unified-diff
/// document.
///
/// Locates the file's `diff --git` section, classifies it from the
/// `---`/`+++` header names, and replays the hunk bodies. A path absent
/// from the document yields an empty-content [`ParsedDiff`].
pub(super) fn reconstruct_file(diff_text: &str, file_path: &str) -> ParsedDiff {
    let lines: Vec<&str> = diff_text.lines().collect();

    let marker = file_marker(file_path);
    let Some(start) = lines.iter().position(|line| *line == marker) else {
        return ParsedDiff::default();
    };

    // The section runs to the next file's marker or the end of the document.
    let end = lines[start + 1..]
        .iter()
        .position(|line| line.starts_with("diff --git"))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());
    let section = &lines[start..end];

    let old_file_name = section
        .iter()
        .find_map(|line| line.strip_prefix("--- "))
        .and_then(parse_file_header);
    let new_file_name = section
        .iter()
        .find_map(|line| line.strip_prefix("+++ "))
        .and_then(parse_file_header);

    let (old_content, new_content) = if old_file_name.is_none() {
        // Created file: only added lines exist.
        (String::new(), collect_body_lines(section, '+', "+++"))
    } else if new_file_name.is_none() {
        // Deleted file: only removed lines exist.
        (collect_body_lines(section, '-', "---"), String::new())
    } else {
        replay_hunks(section)
    };

    ParsedDiff {
        old_content,
        new_content,
        old_file_name,
        new_file_name,
    }
}

/// Collect the body lines carrying `marker` after the first `@@` header,
/// with the marker stripped, joined by newline.
///
/// Used for created (`+`) and deleted (`-`) files, whose sections only
/// carry one side. The `+++`/`---` file header is excluded explicitly.
fn collect_body_lines(section: &[&str], marker: char, header_prefix: &str) -> String {
    let mut contents = Vec::new();
    let mut in_body = false;

    for line in section {
        if line.starts_with("@@") {
            in_body = true;
            continue;
        }
        if !in_body || line.starts_with(header_prefix) {
            continue;
        }
        if let Some(content) = line.strip_prefix(marker) {
            contents.push(content);
        }
    }

    contents.join("\n")
}

/// Replay a modified file's hunks into full old/new line arrays.
///
/// Each matched `@@` header reseeds the running cursors to one line
/// before its start and pads the arrays with empty-string placeholders up
/// to the cursor. The placeholders stand in for untouched content between
/// hunks that the diff does not include, so the reconstruction is exact
/// only inside hunk coverage.
///
/// A malformed header still opens a hunk body but neither reseeds nor
/// pads, so subsequent body lines append with stale numbering; the parse
/// degrades instead of failing.
fn replay_hunks(section: &[&str]) -> (String, String) {
    let mut old_lines: Vec<String> = Vec::new();
    let mut new_lines: Vec<String> = Vec::new();
    let mut old_cursor = 0usize;
    let mut new_cursor = 0usize;
    let mut in_body = false;

    for line in section {
        if line.starts_with("@@") {
            in_body = true;
            if let Some((old_start, new_start)) = parse_hunk_header(line) {
                old_cursor = old_start.saturating_sub(1);
                new_cursor = new_start.saturating_sub(1);
                while old_lines.len() < old_cursor {
                    old_lines.push(String::new());
                }
                while new_lines.len() < new_cursor {
                    new_lines.push(String::new());
                }
            }
            continue;
        }
        if !in_body || line.starts_with("---") || line.starts_with("+++") {
            continue;
        }

        if let Some(content) = line.strip_prefix('-') {
            old_lines.push(content.to_string());
            old_cursor += 1;
        } else if let Some(content) = line.strip_prefix('+') {
            new_lines.push(content.to_string());
            new_cursor += 1;
        } else if let Some(content) = line.strip_prefix(' ') {
            // Context line: identical on both sides.
            old_lines.push(content.to_string());
            new_lines.push(content.to_string());
            old_cursor += 1;
            new_cursor += 1;
        }
    }

    (old_lines.join("\n"), new_lines.join("\n"))
}
