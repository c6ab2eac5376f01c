//! git-check-diff: map a working-tree diff to the merge-base tags that
//! already contain every commit it touches.
//!
//! The pipeline is [`diff`] (hunk parsing) -> [`blame`] (line to commit)
//! -> [`resolve`] (commit to common tags) -> [`report`] (rendering). The
//! [`git`] module is the only place that shells out.

pub mod blame;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod report;
pub mod resolve;
pub mod tags;

#[cfg(test)]
mod test_support;
