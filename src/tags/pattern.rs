//! Tag name validation and numeric ordering.

use crate::error::{CheckDiffError, Result};
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Prefix used when the config does not override it.
pub const DEFAULT_TAG_PREFIX: &str = "MERGE_BASE_";

/// A validated merge-base tag.
///
/// Ordering is by `number` first; the name only breaks ties between
/// spellings such as `MERGE_BASE_7` and `MERGE_BASE_007`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MergeBaseTag {
    pub name: String,
    pub number: u64,
}

impl Ord for MergeBaseTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for MergeBaseTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MergeBaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Compiled `<prefix><N>` matcher.
#[derive(Debug, Clone)]
pub struct TagPattern {
    prefix: String,
    regex: Regex,
}

impl TagPattern {
    /// Compile a matcher for tags named `{prefix}{N}`.
    ///
    /// # Returns
    ///
    /// * `Ok(TagPattern)` - Compiled matcher
    /// * `Err(CheckDiffError::UserError)` - Empty prefix
    pub fn new(prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(CheckDiffError::UserError(
                "tag prefix must not be empty".to_string(),
            ));
        }

        let regex = Regex::new(&format!(r"^{}([0-9]+)$", regex::escape(prefix))).map_err(|e| {
            CheckDiffError::UserError(format!("invalid tag prefix '{}': {}", prefix, e))
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Glob handed to `git tag -l`.
    pub fn glob(&self) -> String {
        format!("{}*", self.prefix)
    }

    /// Validate a tag name, returning `None` if it does not match.
    ///
    /// A suffix too large for `u64` is treated as malformed.
    pub fn parse(&self, name: &str) -> Option<MergeBaseTag> {
        let digits = self.regex.captures(name)?.get(1)?.as_str();
        let number = digits.parse().ok()?;
        Some(MergeBaseTag {
            name: name.to_string(),
            number,
        })
    }

    /// Validate and sort tag names by numeric suffix.
    ///
    /// Returns the sorted, de-duplicated valid tags and the names that did
    /// not match, in input order.
    pub fn sort<I, S>(&self, names: I) -> (Vec<MergeBaseTag>, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut valid = Vec::new();
        let mut malformed = Vec::new();

        for name in names {
            let name = name.as_ref();
            match self.parse(name) {
                Some(tag) => valid.push(tag),
                None => malformed.push(name.to_string()),
            }
        }

        valid.sort();
        valid.dedup();
        (valid, malformed)
    }
}
