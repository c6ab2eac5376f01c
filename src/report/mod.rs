//! Result rendering for git-check-diff.
//!
//! The resolver never truncates; the display limit, tag dates and hunk echo
//! are applied here.

mod json;
mod text;

pub use json::render_json;
pub use text::render_text;

use crate::resolve::Resolution;
use crate::tags::MergeBaseTag;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

/// Commit dates keyed by tag name.
pub type TagDates = HashMap<String, DateTime<FixedOffset>>;

/// Presentation choices for the text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Tags listed per section before collapsing (0 = unlimited).
    pub limit: usize,
    /// Echo each hunk's header and body lines.
    pub show_hunks: bool,
}

/// Split `tags` into the shown prefix and the number hidden by `limit`.
pub(crate) fn truncate<T>(tags: &[T], limit: usize) -> (&[T], usize) {
    if limit == 0 || tags.len() <= limit {
        (tags, 0)
    } else {
        (&tags[..limit], tags.len() - limit)
    }
}

/// Tags that the text report will show under `limit`, without duplicates.
///
/// Used to fetch dates only for what is printed.
pub fn displayed_tags(resolution: &Resolution, limit: usize) -> Vec<&MergeBaseTag> {
    let mut shown: Vec<&MergeBaseTag> = Vec::new();

    if resolution.common_tags.is_empty() {
        for overlap in &resolution.partial {
            let (tags, _) = truncate(&overlap.tags, limit);
            shown.extend(tags.iter().map(|shared| &shared.tag));
        }
    } else {
        let (tags, _) = truncate(&resolution.common_tags, limit);
        shown.extend(tags);
    }

    shown.sort();
    shown.dedup();
    shown
}
