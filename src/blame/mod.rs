//! Per-line commit attribution for git-check-diff.
//!
//! A [`BlameTable`] maps 1-based line numbers to the commit that last
//! touched the line. Lines whose blame output has no leading token are
//! stored as `None`, so "no blame data" is a typed absence rather than a
//! placeholder string.

use crate::error::Result;
use crate::git::run_git;
use std::path::Path;


/// Commit identifiers indexed by 1-based line number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlameTable {
    commits: Vec<Option<String>>,
}

impl BlameTable {
    /// Build a table from blame output, one line of text per source line.
    ///
    /// The first whitespace-delimited token of each line is taken as the
    /// commit identifier.
    pub fn parse(blame_output: &str) -> Self {
        let commits = blame_output
            .lines()
            .map(|line| line.split_whitespace().next().map(str::to_string))
            .collect();
        Self { commits }
    }

    /// Build a table directly from per-line commit identifiers, line 1 first.
    pub fn from_commits<I, S>(commits: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            commits: commits.into_iter().map(|c| c.map(Into::into)).collect(),
        }
    }

    /// The commit that last touched `line`.
    ///
    /// Returns `None` for line 0, lines past the end of the table, and lines
    /// with no (or an empty) commit identifier.
    pub fn commit_at(&self, line: usize) -> Option<&str> {
        let index = line.checked_sub(1)?;
        self.commits
            .get(index)?
            .as_deref()
            .filter(|commit| !commit.is_empty())
    }

    /// Number of lines in the table.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Blame `file` at `revision`.
///
/// Runs `git blame -l --root {revision} -- {file}`: long hashes, and root
/// commits are not shown as boundaries so every line starts with a plain
/// hash.
pub fn blame_file<P: AsRef<Path>>(cwd: P, revision: &str, file: &str) -> Result<BlameTable> {
    let output = run_git(&cwd, &["blame", "-l", "--root", revision, "--", file])?;
    Ok(BlameTable::parse(&output.stdout))
}
