//! Attribution and tag intersection.

use super::types::{AffectedCommit, Diagnostics, LineOffset, PartialOverlap, Resolution, SharedTag};
use crate::blame::BlameTable;
use crate::diff::{Diff, HunkPair};
use crate::error::Result;
use crate::tags::{MergeBaseTag, TagPattern, TagSource};
use std::collections::HashMap;
use std::ops::Range;
use tracing::{debug, info, warn};

/// Line numbers (old-file numbering) whose blame decides `hunk`'s commit.
///
/// - Pure insertion (`removed.count == 0`): the insertion point, clamped to
///   line 1 since an insertion at the top of the file reports line 0.
/// - Single-line removal: `removed.start` shifted by `offset`.
/// - Multi-line removal: `removed.start .. removed.start + count - 1`
///   (exclusive), each shifted by `offset`. The last removed line is not
///   visited.
///
/// Shifts saturate at both ends of `usize`; line 0 never has a blame entry.
pub fn attributed_lines(hunk: &HunkPair, offset: LineOffset) -> Range<usize> {
    let removed = hunk.removed;
    let shift = |line: usize| line.saturating_add_signed(offset.delta());

    if removed.is_empty() {
        let line = removed.start.max(1);
        line..line.saturating_add(1)
    } else if removed.count == 1 {
        let line = shift(removed.start);
        line..line.saturating_add(1)
    } else {
        let end = removed.start.saturating_add(removed.count - 1);
        shift(removed.start)..shift(end)
    }
}

/// Resolves a diff to the commits it touches and their common tags.
///
/// Holds no state between calls; every accumulator lives inside
/// [`CommitTagResolver::resolve`].
pub struct CommitTagResolver<'a, S: TagSource + ?Sized> {
    tags: &'a S,
    pattern: &'a TagPattern,
    offset: LineOffset,
}

impl<'a, S: TagSource + ?Sized> CommitTagResolver<'a, S> {
    pub fn new(tags: &'a S, pattern: &'a TagPattern, offset: LineOffset) -> Self {
        Self {
            tags,
            pattern,
            offset,
        }
    }

    /// Attribute every hunk of `diff` through `blame` and intersect tags.
    ///
    /// Lines without blame data are skipped and recorded in
    /// [`Diagnostics::skipped_lines`]; lines past the end of the table are
    /// only counted, in [`Diagnostics::lines_past_end`]. Tag names that do not match the
    /// pattern are skipped and recorded in [`Diagnostics::malformed_tags`].
    ///
    /// # Returns
    ///
    /// * `Ok(Resolution)` - Affected commits, common tags and partial overlap
    /// * `Err(CheckDiffError)` - The tag source failed
    pub fn resolve(&self, diff: &Diff, blame: &BlameTable) -> Result<Resolution> {
        let mut diagnostics = Diagnostics::default();
        let mut commits = self.attribute(diff, blame, &mut diagnostics);

        let mut seen: HashMap<MergeBaseTag, usize> = HashMap::new();
        for affected in &mut commits {
            let names = self.tags.tags_containing(&affected.commit)?;
            let (tags, malformed) = self.pattern.sort(&names);

            for name in malformed {
                warn!(commit = %affected.commit, tag = %name, "skipping malformed tag");
                diagnostics.malformed_tags.push(name);
            }
            for tag in &tags {
                *seen.entry(tag.clone()).or_default() += 1;
            }
            affected.tags = tags;
        }

        let total = commits.len();
        let mut common_tags: Vec<MergeBaseTag> = seen
            .iter()
            .filter(|&(_, &count)| count == total)
            .map(|(tag, _)| tag.clone())
            .collect();
        common_tags.sort();

        let partial = if common_tags.is_empty() {
            commits
                .iter()
                .map(|affected| PartialOverlap {
                    commit: affected.commit.clone(),
                    tags: affected
                        .tags
                        .iter()
                        .map(|tag| SharedTag {
                            tag: tag.clone(),
                            shared_by: seen.get(tag).copied().unwrap_or(0),
                        })
                        .collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        info!(
            commits = total,
            common_tags = common_tags.len(),
            skipped_lines = diagnostics.skipped_lines.len(),
            lines_past_end = diagnostics.lines_past_end,
            "resolved diff"
        );

        Ok(Resolution {
            commits,
            common_tags,
            partial,
            diagnostics,
        })
    }

    /// Map hunks to commits, keeping commits in first-attributed order.
    fn attribute(
        &self,
        diff: &Diff,
        blame: &BlameTable,
        diagnostics: &mut Diagnostics,
    ) -> Vec<AffectedCommit> {
        let mut commits: Vec<AffectedCommit> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for hunk in &diff.hunks {
            let lines = attributed_lines(hunk, self.offset);
            let table_end = lines.end.min(blame.len() + 1);
            let past_end = lines.end - table_end.max(lines.start);
            if past_end > 0 {
                debug!(
                    hunk = %hunk.header(),
                    past_end,
                    blame_len = blame.len(),
                    "lines past the end of the blame table"
                );
                diagnostics.lines_past_end += past_end;
            }

            for line in lines.start..table_end {
                let Some(commit) = blame.commit_at(line) else {
                    debug!(line, "no blame entry for line");
                    diagnostics.skipped_lines.push(line);
                    continue;
                };

                let slot = *index.entry(commit.to_string()).or_insert_with(|| {
                    commits.push(AffectedCommit {
                        commit: commit.to_string(),
                        lines: Vec::new(),
                        tags: Vec::new(),
                    });
                    commits.len() - 1
                });
                commits[slot].lines.push(line);
            }
        }

        commits
    }
}
