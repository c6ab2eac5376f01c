//! Config struct definition and default implementation.

use super::types::*;
use crate::resolve::LineOffset;
use serde::{Deserialize, Serialize};

/// Configuration for git-check-diff.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of merge-base tag names; the rest must be a decimal number.
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Revision blamed to find the commit owning each line.
    #[serde(default = "default_blame_revision")]
    pub blame_revision: String,

    /// Common tags listed before the rest collapse into "... N more" (0 = all).
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Offset used when neither `--before` nor `--after` is given.
    #[serde(default)]
    pub default_offset: LineOffset,

    /// Whether to print tag dates by default.
    #[serde(default)]
    pub show_dates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_prefix: default_tag_prefix(),
            blame_revision: default_blame_revision(),
            display_limit: default_display_limit(),
            default_offset: LineOffset::default(),
            show_dates: false,
        }
    }
}
