//! Commit and tag consensus for git-check-diff.
//!
//! Maps each hunk of a diff to the line numbers it affects, looks those
//! lines up in a blame table to find the owning commits, then intersects
//! the merge-base tags of every affected commit. When no tag is common to
//! all of them, a per-commit view of partially shared tags is produced
//! instead.

mod resolver;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use resolver::{CommitTagResolver, attributed_lines};
pub use types::{AffectedCommit, Diagnostics, LineOffset, PartialOverlap, Resolution, SharedTag};
