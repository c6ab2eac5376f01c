//! CLI argument parsing for git-check-diff.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! check itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::resolve::LineOffset;

/// Find the merge-base tags that already contain every commit touched by
/// the working-tree changes of a file.
///
/// Each changed line is blamed to the commit that last touched it; the
/// MERGE_BASE_<N> tags containing all of those commits are listed. When no
/// tag contains them all, each commit's tags are shown instead.
#[derive(Parser, Debug)]
#[command(name = "git-check-diff", bin_name = "git check-diff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File whose working-tree diff is examined.
    pub file: String,

    /// Blame the line before a single-line removal.
    #[arg(short = 'B', long, conflicts_with = "after")]
    pub before: bool,

    /// Blame the line after a single-line removal.
    #[arg(short = 'A', long)]
    pub after: bool,

    /// Maximum tags listed before collapsing the rest (0 = all).
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show the commit date of each listed tag.
    #[arg(short, long)]
    pub dates: bool,

    /// Print the parsed hunks before the result.
    #[arg(long)]
    pub hunks: bool,

    /// Print the full result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Revision to blame (default: config `blame_revision`, usually HEAD).
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Config file (default: .git-check-diff.yaml at the repository root).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Offset requested on the command line, if any.
    pub fn offset(&self) -> Option<LineOffset> {
        if self.before {
            Some(LineOffset::Before)
        } else if self.after {
            Some(LineOffset::After)
        } else {
            None
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
