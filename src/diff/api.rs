//! Public types and the git-backed diff source.

use crate::error::Result;
use crate::git::run_git;
use serde::Serialize;
use std::path::Path;

use super::parser::parse_diff_str;

/// One side of a hunk header: `start` and number of lines.
///
/// `count == 0` means this side of the hunk holds no lines (a pure
/// insertion on the removed side, a pure deletion on the added side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub count: usize,
}

impl LineRange {
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Returns true if this side of the hunk holds no lines.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// A single `@@ -a,b +c,d @@` hunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HunkPair {
    /// Range in the old file.
    pub removed: LineRange,
    /// Range in the new file.
    pub added: LineRange,
    /// Header line followed by the non-empty body lines, for display only.
    #[serde(skip)]
    pub text: Vec<String>,
}

impl HunkPair {
    /// The raw `@@ ... @@` header line.
    pub fn header(&self) -> &str {
        self.text.first().map(String::as_str).unwrap_or("")
    }
}

/// A parsed single-file diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    /// Sum of `added.count` over all hunks.
    pub added_total: usize,
    /// Sum of `removed.count` over all hunks.
    pub removed_total: usize,
    /// Hunks in order of appearance.
    pub hunks: Vec<HunkPair>,
}

impl Diff {
    /// Returns true if the diff has no hunks.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    pub(super) fn push(&mut self, hunk: HunkPair) {
        self.added_total += hunk.added.count;
        self.removed_total += hunk.removed.count;
        self.hunks.push(hunk);
    }
}

/// Diff the working tree copy of `file` against the index.
///
/// Runs `git diff -U0 -- {file}` so each hunk header describes exactly the
/// changed lines with no surrounding context. Colour and external diff
/// drivers are disabled since they change the header format.
///
/// # Returns
///
/// * `Ok(Diff)` - Parsed hunks (empty if the file is unchanged)
/// * `Err(CheckDiffError::GitError)` - Git command failed
/// * `Err(CheckDiffError::ParseError)` - A hunk header was malformed
pub fn working_tree_diff<P: AsRef<Path>>(cwd: P, file: &str) -> Result<Diff> {
    let output = run_git(&cwd, &["diff", "--no-color", "--no-ext-diff", "-U0", "--", file])?;
    parse_diff_str(&output.stdout)
}
