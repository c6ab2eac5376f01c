//! Result types for commit/tag resolution.

use crate::tags::MergeBaseTag;
use serde::{Deserialize, Serialize};

/// Bias applied to single-line removals before the blame lookup.
///
/// Blame can attribute a one-line change to a neighbour; callers pick
/// whether the line before, the line itself or the line after is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineOffset {
    /// Use the line above (`-1`).
    Before,
    /// Use the reported line.
    #[default]
    Exact,
    /// Use the line below (`+1`).
    After,
}

impl LineOffset {
    /// Signed line delta for this offset.
    pub fn delta(self) -> isize {
        match self {
            LineOffset::Before => -1,
            LineOffset::Exact => 0,
            LineOffset::After => 1,
        }
    }
}

/// A commit that owns at least one attributed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffectedCommit {
    pub commit: String,
    /// Attributed line numbers in attribution order.
    pub lines: Vec<usize>,
    /// Valid merge-base tags containing the commit, sorted numerically.
    pub tags: Vec<MergeBaseTag>,
}

/// A tag together with how many affected commits it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedTag {
    pub tag: MergeBaseTag,
    pub shared_by: usize,
}

impl SharedTag {
    /// True if more than one affected commit carries this tag.
    pub fn is_shared(&self) -> bool {
        self.shared_by > 1
    }
}

/// One commit's tags annotated with their overlap, used when there is no
/// common tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialOverlap {
    pub commit: String,
    pub tags: Vec<SharedTag>,
}

/// Lines and tags that were dropped along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Attributed lines inside the blame table with no commit (or line 0).
    pub skipped_lines: Vec<usize>,
    /// Number of attributed lines beyond the last blamed line.
    pub lines_past_end: usize,
    /// Tag names returned by the tag source that did not match the pattern.
    pub malformed_tags: Vec<String>,
}

/// Outcome of resolving one diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Affected commits in the order they were first attributed.
    pub commits: Vec<AffectedCommit>,
    /// Tags containing every affected commit, sorted numerically.
    pub common_tags: Vec<MergeBaseTag>,
    /// Per-commit overlap, filled only when `common_tags` is empty.
    pub partial: Vec<PartialOverlap>,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// True if no line could be attributed to a commit.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
