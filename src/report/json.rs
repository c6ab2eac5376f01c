//! JSON report: the full, untruncated resolution.

use super::TagDates;
use crate::diff::{Diff, HunkPair};
use crate::error::{CheckDiffError, Result};
use crate::resolve::Resolution;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    added_total: usize,
    removed_total: usize,
    hunks: &'a [HunkPair],
    #[serde(flatten)]
    resolution: &'a Resolution,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    tag_dates: BTreeMap<&'a str, String>,
}

/// Render `resolution` as pretty-printed JSON.
pub fn render_json(
    file: &str,
    diff: &Diff,
    resolution: &Resolution,
    dates: &TagDates,
) -> Result<String> {
    let report = JsonReport {
        file,
        added_total: diff.added_total,
        removed_total: diff.removed_total,
        hunks: &diff.hunks,
        resolution,
        tag_dates: dates
            .iter()
            .map(|(tag, date)| (tag.as_str(), date.to_rfc3339()))
            .collect(),
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| CheckDiffError::UserError(format!("failed to serialize report: {}", e)))
}
