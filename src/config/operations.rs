//! Config loading and validation.

use super::model::Config;
use crate::error::{CheckDiffError, Result};
use crate::tags::TagPattern;
use std::path::Path;
use tracing::debug;

/// Characters `git tag -l` treats as pattern syntax.
const GLOB_CHARS: [char; 5] = ['*', '?', '[', ']', '\\'];

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckDiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckDiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config");
        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            CheckDiffError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `tag_prefix` must be non-empty and free of whitespace and glob
    ///   characters (it is passed to `git tag -l` as `{prefix}*`)
    /// - `blame_revision` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.tag_prefix.chars().any(char::is_whitespace) {
            return Err(CheckDiffError::UserError(format!(
                "config validation failed: tag_prefix must not contain whitespace (found '{}')",
                self.tag_prefix
            )));
        }
        if self.tag_prefix.contains(GLOB_CHARS) {
            return Err(CheckDiffError::UserError(format!(
                "config validation failed: tag_prefix must not contain glob characters (found '{}')",
                self.tag_prefix
            )));
        }
        if self.tag_prefix.is_empty() {
            return Err(CheckDiffError::UserError(
                "config validation failed: tag_prefix must not be empty".to_string(),
            ));
        }

        if self.blame_revision.trim().is_empty() {
            return Err(CheckDiffError::UserError(
                "config validation failed: blame_revision must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Compile the tag pattern described by `tag_prefix`.
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(&self.tag_prefix)
    }
}
