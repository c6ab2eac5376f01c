//! Tests for commit/tag resolution.

use super::{AffectedCommit, CommitTagResolver, LineOffset, Resolution, attributed_lines};
use crate::blame::BlameTable;
use crate::diff::{Diff, HunkPair, LineRange, parse_diff_str};
use crate::error::{CheckDiffError, Result};
use crate::tags::{DEFAULT_TAG_PREFIX, TagPattern};
use std::cell::RefCell;
use std::collections::HashMap;

fn hunk(removed: (usize, usize), added: (usize, usize)) -> HunkPair {
    HunkPair {
        removed: LineRange::new(removed.0, removed.1),
        added: LineRange::new(added.0, added.1),
        text: Vec::new(),
    }
}

fn diff_of(hunks: Vec<HunkPair>) -> Diff {
    Diff {
        added_total: hunks.iter().map(|h| h.added.count).sum(),
        removed_total: hunks.iter().map(|h| h.removed.count).sum(),
        hunks,
    }
}

/// Tag source backed by a fixed map; records every lookup.
struct MapTags {
    tags: HashMap<&'static str, Vec<&'static str>>,
    calls: RefCell<Vec<String>>,
}

impl MapTags {
    fn new(entries: &[(&'static str, &[&'static str])]) -> Self {
        Self {
            tags: entries.iter().map(|(c, t)| (*c, t.to_vec())).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl crate::tags::TagSource for MapTags {
    fn tags_containing(&self, commit: &str) -> Result<Vec<String>> {
        self.calls.borrow_mut().push(commit.to_string());
        Ok(self
            .tags
            .get(commit)
            .map(|tags| tags.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default())
    }
}

fn resolve(diff: &Diff, blame: &BlameTable, tags: &MapTags, offset: LineOffset) -> Resolution {
    let pattern = TagPattern::new(DEFAULT_TAG_PREFIX).unwrap();
    CommitTagResolver::new(tags, &pattern, offset)
        .resolve(diff, blame)
        .unwrap()
}

fn commit_of<'a>(result: &'a Resolution, id: &str) -> Option<&'a AffectedCommit> {
    result.commits.iter().find(|c| c.commit == id)
}

fn names(tags: &[crate::tags::MergeBaseTag]) -> Vec<&str> {
    tags.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_pure_insertion_uses_insertion_point() {
    assert_eq!(attributed_lines(&hunk((16, 0), (16, 1)), LineOffset::Exact), 16..17);
}

#[test]
fn test_insertion_at_top_clamps_to_first_line() {
    assert_eq!(attributed_lines(&hunk((0, 0), (1, 3)), LineOffset::Exact), 1..2);
}

#[test]
fn test_insertion_ignores_offset() {
    assert_eq!(attributed_lines(&hunk((16, 0), (16, 1)), LineOffset::Before), 16..17);
    assert_eq!(attributed_lines(&hunk((16, 0), (16, 1)), LineOffset::After), 16..17);
}

#[test]
fn test_single_line_removal_applies_offset() {
    let h = hunk((10, 1), (10, 1));
    assert_eq!(attributed_lines(&h, LineOffset::Before), 9..10);
    assert_eq!(attributed_lines(&h, LineOffset::Exact), 10..11);
    assert_eq!(attributed_lines(&h, LineOffset::After), 11..12);
}

#[test]
fn test_multi_line_removal_skips_last_line() {
    assert_eq!(attributed_lines(&hunk((2, 2), (2, 0)), LineOffset::Exact), 2..3);
    assert_eq!(
        attributed_lines(&hunk((5, 4), (5, 1)), LineOffset::Exact),
        5..8
    );
    assert_eq!(
        attributed_lines(&hunk((5, 4), (5, 1)), LineOffset::After),
        6..9
    );
}

#[test]
fn test_before_offset_on_first_line_saturates_to_zero() {
    assert_eq!(attributed_lines(&hunk((1, 1), (0, 0)), LineOffset::Before), 0..1);
}

#[test]
fn test_multi_line_removal_never_reaches_last_commit() {
    let blame = BlameTable::from_commits([Some("a"), Some("a"), Some("b")]);
    let tags = MapTags::new(&[("a", &["MERGE_BASE_1"]), ("b", &["MERGE_BASE_2"])]);
    let diff = diff_of(vec![hunk((2, 2), (2, 0))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(result.commits.len(), 1);
    assert_eq!(result.commits[0].commit, "a");
    assert_eq!(result.commits[0].lines, vec![2]);
    assert!(commit_of(&result, "b").is_none());
}

#[test]
fn test_common_tag_is_intersection() {
    let blame = BlameTable::from_commits([Some("c1"), Some("c2")]);
    let tags = MapTags::new(&[
        ("c1", &["MERGE_BASE_1", "MERGE_BASE_2"]),
        ("c2", &["MERGE_BASE_2"]),
    ]);
    let diff = diff_of(vec![hunk((1, 1), (1, 1)), hunk((2, 1), (2, 1))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(names(&result.common_tags), vec!["MERGE_BASE_2"]);
    assert!(result.partial.is_empty());
}

#[test]
fn test_no_common_tag_yields_partial_view() {
    let blame = BlameTable::from_commits([Some("c1"), Some("c2")]);
    let tags = MapTags::new(&[
        ("c1", &["MERGE_BASE_1", "MERGE_BASE_2"]),
        ("c2", &["MERGE_BASE_3"]),
    ]);
    let diff = diff_of(vec![hunk((1, 1), (1, 1)), hunk((2, 1), (2, 1))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert!(result.common_tags.is_empty());
    assert_eq!(result.partial.len(), 2);
    assert_eq!(result.partial[0].commit, "c1");
    assert_eq!(
        result.partial[0]
            .tags
            .iter()
            .map(|t| t.tag.name.as_str())
            .collect::<Vec<_>>(),
        vec!["MERGE_BASE_1", "MERGE_BASE_2"]
    );
    assert_eq!(result.partial[1].commit, "c2");
    assert_eq!(result.partial[1].tags[0].tag.name, "MERGE_BASE_3");
    assert!(
        result
            .partial
            .iter()
            .flat_map(|p| &p.tags)
            .all(|t| !t.is_shared())
    );
}

#[test]
fn test_partial_view_marks_tags_shared_by_some_commits() {
    let blame = BlameTable::from_commits([Some("c1"), Some("c2"), Some("c3")]);
    let tags = MapTags::new(&[
        ("c1", &["MERGE_BASE_5", "MERGE_BASE_6"]),
        ("c2", &["MERGE_BASE_5"]),
        ("c3", &["MERGE_BASE_7"]),
    ]);
    let diff = diff_of(vec![hunk((1, 1), (1, 1)), hunk((2, 1), (2, 1)), hunk((3, 1), (3, 1))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert!(result.common_tags.is_empty());
    let c1 = &result.partial[0];
    assert_eq!(c1.tags[0].tag.name, "MERGE_BASE_5");
    assert_eq!(c1.tags[0].shared_by, 2);
    assert!(c1.tags[0].is_shared());
    assert!(!c1.tags[1].is_shared());
    assert!(!result.partial[2].tags[0].is_shared());
}

#[test]
fn test_common_tags_sorted_numerically() {
    let blame = BlameTable::from_commits([Some("c1")]);
    let tags = MapTags::new(&[("c1", &["MERGE_BASE_10", "MERGE_BASE_2", "MERGE_BASE_1"])]);
    let diff = diff_of(vec![hunk((1, 1), (1, 1))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(
        names(&result.common_tags),
        vec!["MERGE_BASE_1", "MERGE_BASE_2", "MERGE_BASE_10"]
    );
}

#[test]
fn test_each_commit_looked_up_once() {
    let blame = BlameTable::from_commits([Some("a"), Some("a"), Some("a"), Some("b")]);
    let tags = MapTags::new(&[("a", &["MERGE_BASE_1"]), ("b", &["MERGE_BASE_1"])]);
    let diff = diff_of(vec![hunk((1, 4), (1, 0)), hunk((4, 1), (0, 0))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(*tags.calls.borrow(), vec!["a", "b"]);
    assert_eq!(commit_of(&result, "a").unwrap().lines, vec![1, 2, 3]);
    assert_eq!(commit_of(&result, "b").unwrap().lines, vec![4]);
    assert_eq!(names(&result.common_tags), vec!["MERGE_BASE_1"]);
}

#[test]
fn test_commits_keep_first_attributed_order() {
    let blame = BlameTable::from_commits([Some("zzz"), Some("aaa"), Some("zzz")]);
    let tags = MapTags::new(&[]);
    let diff = diff_of(vec![hunk((1, 1), (1, 1)), hunk((2, 1), (2, 1)), hunk((3, 1), (3, 1))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    let order: Vec<&str> = result.commits.iter().map(|c| c.commit.as_str()).collect();
    assert_eq!(order, vec!["zzz", "aaa"]);
    assert_eq!(result.commits[0].lines, vec![1, 3]);
}

#[test]
fn test_missing_blame_lines_are_skipped() {
    let blame = BlameTable::from_commits([Some("a"), None]);
    let tags = MapTags::new(&[("a", &["MERGE_BASE_1"])]);
    let diff = diff_of(vec![
        hunk((1, 1), (1, 1)),
        hunk((2, 1), (2, 1)),
        hunk((9, 1), (9, 1)),
    ]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(result.commits.len(), 1);
    assert_eq!(result.diagnostics.skipped_lines, vec![2]);
    assert_eq!(result.diagnostics.lines_past_end, 1);
    assert_eq!(names(&result.common_tags), vec!["MERGE_BASE_1"]);
}

#[test]
fn test_huge_removal_stops_at_end_of_blame_table() {
    let removed = 100_000_000_000;
    let h = hunk((1, removed), (1, 0));
    assert_eq!(attributed_lines(&h, LineOffset::Exact).len(), removed - 1);

    let blame = BlameTable::from_commits([Some("a"), Some("a"), Some("b")]);
    let tags = MapTags::new(&[("a", &["MERGE_BASE_1"]), ("b", &["MERGE_BASE_1"])]);

    let result = resolve(&diff_of(vec![h]), &blame, &tags, LineOffset::Exact);

    assert_eq!(commit_of(&result, "a").unwrap().lines, vec![1, 2]);
    assert_eq!(commit_of(&result, "b").unwrap().lines, vec![3]);
    assert!(result.diagnostics.skipped_lines.is_empty());
    assert_eq!(result.diagnostics.lines_past_end, removed - 1 - 3);
    assert_eq!(names(&result.common_tags), vec!["MERGE_BASE_1"]);
}

#[test]
fn test_range_at_usize_max_saturates() {
    let h = hunk((usize::MAX, 1), (1, 0));
    assert_eq!(attributed_lines(&h, LineOffset::After), usize::MAX..usize::MAX);
    assert_eq!(attributed_lines(&h, LineOffset::Exact), usize::MAX..usize::MAX);

    let blame = BlameTable::from_commits([Some("a")]);
    let tags = MapTags::new(&[("a", &["MERGE_BASE_1"])]);
    let result = resolve(&diff_of(vec![h]), &blame, &tags, LineOffset::After);

    assert!(result.is_empty());
    assert_eq!(result.diagnostics.lines_past_end, 0);
}

#[test]
fn test_malformed_tags_are_skipped_and_counted() {
    let blame = BlameTable::from_commits([Some("a"), Some("b")]);
    let tags = MapTags::new(&[
        ("a", &["MERGE_BASE_4", "MERGE_BASE_oops"]),
        ("b", &["MERGE_BASE_4", "MERGE_BASE_"]),
    ]);
    let diff = diff_of(vec![hunk((1, 1), (1, 1)), hunk((2, 1), (2, 1))]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(names(&result.common_tags), vec!["MERGE_BASE_4"]);
    assert_eq!(
        result.diagnostics.malformed_tags,
        vec!["MERGE_BASE_oops", "MERGE_BASE_"]
    );
}

#[test]
fn test_empty_diff_resolves_to_nothing() {
    let blame = BlameTable::from_commits([Some("a")]);
    let tags = MapTags::new(&[("a", &["MERGE_BASE_1"])]);

    let result = resolve(&Diff::default(), &blame, &tags, LineOffset::Exact);

    assert!(result.is_empty());
    assert!(result.common_tags.is_empty());
    assert!(result.partial.is_empty());
    assert!(tags.calls.borrow().is_empty());
}

#[test]
fn test_offset_changes_attributed_commit() {
    let blame = BlameTable::from_commits([Some("a"), Some("b"), Some("c")]);
    let tags = MapTags::new(&[]);
    let diff = diff_of(vec![hunk((2, 1), (2, 1))]);

    let before = resolve(&diff, &blame, &tags, LineOffset::Before);
    let after = resolve(&diff, &blame, &tags, LineOffset::After);

    assert_eq!(before.commits[0].commit, "a");
    assert_eq!(after.commits[0].commit, "c");
}

#[test]
fn test_tag_source_failure_propagates() {
    let blame = BlameTable::from_commits([Some("a")]);
    let pattern = TagPattern::new(DEFAULT_TAG_PREFIX).unwrap();
    let failing = |_: &str| -> Result<Vec<String>> {
        Err(CheckDiffError::GitError("tag lookup failed".to_string()))
    };
    let diff = diff_of(vec![hunk((1, 1), (1, 1))]);

    let err = CommitTagResolver::new(&failing, &pattern, LineOffset::Exact)
        .resolve(&diff, &blame)
        .unwrap_err();

    assert!(matches!(err, CheckDiffError::GitError(_)));
}

#[test]
fn test_resolves_parsed_diff() {
    let diff = parse_diff_str("@@ -1 +0,0 @@\n-// hello\n@@ -16,0 +16,1 @@ import (\n+x\n").unwrap();
    let mut commits = vec![Some("old"); 20];
    commits[15] = Some("new");
    let blame = BlameTable::from_commits(commits);
    let tags = MapTags::new(&[
        ("old", &["MERGE_BASE_1", "MERGE_BASE_2"]),
        ("new", &["MERGE_BASE_2"]),
    ]);

    let result = resolve(&diff, &blame, &tags, LineOffset::Exact);

    assert_eq!(commit_of(&result, "old").unwrap().lines, vec![1]);
    assert_eq!(commit_of(&result, "new").unwrap().lines, vec![16]);
    assert_eq!(names(&result.common_tags), vec!["MERGE_BASE_2"]);
}
