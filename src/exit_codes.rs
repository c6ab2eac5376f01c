//! Exit code constants for git-check-diff.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, not in a repository)
//! - 2: Parse failure (malformed diff output)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or not inside a repository.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a hunk header could not be parsed.
pub const PARSE_FAILURE: i32 = 2;

/// Git operation failure: diff, blame or tag lookup failed.
pub const GIT_FAILURE: i32 = 3;
