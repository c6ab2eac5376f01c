//! Repository context resolution for git-check-diff.
//!
//! Finds the repository root from the invocation directory and locates the
//! config file. Diff and blame run from the invocation directory so file
//! arguments keep their shell-relative meaning.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{CheckDiffError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Directory the command was invoked from.
    pub cwd: PathBuf,

    /// Top level of the repository containing `cwd`.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(CheckDiffError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            CheckDiffError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        let repo_root = git::get_repo_root(cwd)?;

        Ok(Self {
            cwd: cwd.to_path_buf(),
            repo_root,
        })
    }

    /// Default config file location (`{repo_root}/.git-check-diff.yaml`).
    pub fn config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAME)
    }

    /// Load the config from `explicit` if given, else from the repository
    /// default location, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load_config(&self, explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Config::load(path),
            None => Config::load_or_default(self.config_path()),
        }
    }
}
