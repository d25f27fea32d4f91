//! Linediff: line-level diff computation and unified-diff reconstruction.
//!
//! The crate has two cooperating halves that share one line-record
//! vocabulary ([`DiffLine`]) but never call each other:
//!
//! - The synthesis path ([`diff_hunks`] / [`diff_changes`]) computes a
//!   line-level difference between two in-memory texts via an LCS table
//!   and groups the changes into review-sized hunks with surrounding
//!   context.
//! - The parsing path ([`extract_file_diff`]) takes a unified-diff
//!   document (as produced by `git diff`), locates one file's section,
//!   and reconstructs that file's full before/after content from the
//!   patch alone.
//!
//! Both paths are pure, synchronous computations over in-memory strings:
//! no I/O, no shared state, results freshly allocated per call. The LCS
//! table costs O(m*n) time and space; callers are responsible for bounding
//! input size.

pub mod compute;
pub mod error;
pub mod extract;
pub mod model;

pub use compute::{DEFAULT_CONTEXT_LINES, diff_changes, diff_hunks};
pub use error::{DiffError, Result};
pub use extract::extract_file_diff;
pub use model::{DiffHunk, DiffLine, DiffLineKind, ParsedDiff};
