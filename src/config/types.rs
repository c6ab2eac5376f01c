//! Configuration constants and defaults for git-check-diff.

use crate::tags::DEFAULT_TAG_PREFIX;

/// Config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".git-check-diff.yaml";

/// Default number of common tags listed before collapsing.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

pub fn default_tag_prefix() -> String {
    DEFAULT_TAG_PREFIX.to_string()
}

pub fn default_blame_revision() -> String {
    "HEAD".to_string()
}

pub fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}
