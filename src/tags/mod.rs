//! Merge-base tag model for git-check-diff.
//!
//! Release boundaries are marked with tags named `<prefix><N>` (by default
//! `MERGE_BASE_<N>`). Tags order by their numeric suffix, so
//! `MERGE_BASE_2` sorts before `MERGE_BASE_10`.

mod pattern;
mod source;


// Re-export public API
pub use pattern::{DEFAULT_TAG_PREFIX, MergeBaseTag, TagPattern};
pub use source::{GitTagSource, TagSource, tag_date};
