//! Command implementations for git-check-diff.

mod check;

pub use check::{cmd_check, run_check};
