//! Unified diff parsing for git-check-diff.
//!
//! Turns the output of `git diff -U0 -- <file>` into an ordered list of
//! hunk pairs (removed range, added range) plus aggregate line counts.
//! Only hunk headers carry meaning here; body lines are kept for display.
//!
//! Range specs follow the unified format: `-start,count` or `-start`,
//! where an omitted count means a single line.

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{Diff, HunkPair, LineRange, working_tree_diff};
pub use helpers::parse_range_spec;
pub use parser::{parse_diff, parse_diff_str};
