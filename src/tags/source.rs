//! Tag lookups backed by git.

use crate::error::{CheckDiffError, Result};
use crate::git::run_git;
use chrono::{DateTime, FixedOffset};
use std::path::{Path, PathBuf};

/// Answers "which merge-base tags contain this commit?".
///
/// Lookups are read-only, so results for different commits may be
/// gathered in any order.
pub trait TagSource {
    /// Raw tag names whose history contains `commit`.
    fn tags_containing(&self, commit: &str) -> Result<Vec<String>>;
}

impl<F> TagSource for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn tags_containing(&self, commit: &str) -> Result<Vec<String>> {
        self(commit)
    }
}

/// Tag source that runs `git tag --contains` in a repository.
#[derive(Debug, Clone)]
pub struct GitTagSource {
    repo_root: PathBuf,
    glob: String,
}

impl GitTagSource {
    /// `glob` restricts the listing, e.g. `MERGE_BASE_*`.
    pub fn new<P: AsRef<Path>>(repo_root: P, glob: impl Into<String>) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
            glob: glob.into(),
        }
    }
}

impl TagSource for GitTagSource {
    fn tags_containing(&self, commit: &str) -> Result<Vec<String>> {
        let output = run_git(
            &self.repo_root,
            &["tag", "--contains", commit, "-l", &self.glob],
        )?;

        Ok(output
            .lines()
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Commit date of the commit a tag points at.
///
/// Runs `git log -1 --format=%cI {tag}`. Returns `Ok(None)` if git prints
/// nothing.
pub fn tag_date<P: AsRef<Path>>(cwd: P, tag: &str) -> Result<Option<DateTime<FixedOffset>>> {
    let output = run_git(&cwd, &["log", "-1", "--format=%cI", tag])?;
    let stamp = output.stdout.trim();
    if stamp.is_empty() {
        return Ok(None);
    }

    DateTime::parse_from_rfc3339(stamp).map(Some).map_err(|e| {
        CheckDiffError::GitError(format!(
            "unexpected date '{}' for tag '{}': {}",
            stamp, tag, e
        ))
    })
}
