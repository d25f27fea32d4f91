//! Error types for linediff.
//!
//! Uses thiserror for derive macros. The engine's contract favors silent,
//! well-defined fallbacks over raised errors (a file path absent from a
//! diff document is an empty result, a malformed hunk header is skipped),
//! so in practice the public API returns `Ok` for every well-typed input.

use thiserror::Error;

/// Error type for linediff operations.
///
/// The variant below is not raised by the current parsing rules, which
/// degrade instead of failing; it is defined so the `Result`-typed API
/// can grow structural validation without breaking callers.
#[derive(Error, Debug)]
pub enum DiffError {
    /// The diff document violates the unified-diff grammar beyond what
    /// the degrading rules can absorb.
    #[error("Invalid unified diff: {0}")]
    InvalidDiff(String),
}

/// Result type alias for linediff operations.
pub type Result<T> = std::result::Result<T, DiffError>;
