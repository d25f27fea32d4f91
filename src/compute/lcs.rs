//! Longest-common-subsequence table construction.

/// Build the LCS prefix table for two line sequences.
///
/// `table[i][j]` is the length of the longest common subsequence of
/// `old_lines[0..i]` and `new_lines[0..j]`; row 0 and column 0 are the
/// zero base cases. Lines compare by exact string equality, no
/// normalization.
///
/// The full (m+1)x(n+1) table is O(m*n) in time and space. That cost is
/// an accepted trade-off for interactively sized files: the backtracking
/// in `sequence` depends on having every cell available, and a
/// space-reduced variant would change its tie-break behavior.
pub(super) fn lcs_table(old_lines: &[&str], new_lines: &[&str]) -> Vec<Vec<usize>> {
    let m = old_lines.len();
    let n = new_lines.len();
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if old_lines[i - 1] == new_lines[j - 1] {
                table[i][j] = table[i - 1][j - 1] + 1;
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
            }
        }
    }

    table
}
