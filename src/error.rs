//! Error types for git-check-diff.
//!
//! Uses thiserror for derive macros and keeps messages user-actionable.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-check-diff operations.
#[derive(Error, Debug)]
pub enum CheckDiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Diff output could not be parsed.
    #[error("invalid diff: {0}")]
    ParseError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl CheckDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckDiffError::UserError(_) => exit_codes::USER_ERROR,
            CheckDiffError::ParseError(_) => exit_codes::PARSE_FAILURE,
            CheckDiffError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for git-check-diff operations.
pub type Result<T> = std::result::Result<T, CheckDiffError>;
