//! Implementation of `git check-diff <file>`.
//!
//! Diff the file's working tree against the index, blame the committed
//! version, resolve the affected commits to their merge-base tags and
//! render the result.

use crate::blame::blame_file;
use crate::cli::Cli;
use crate::context::RepoContext;
use crate::diff::working_tree_diff;
use crate::error::Result;
use crate::report::{ReportOptions, TagDates, displayed_tags, render_json, render_text};
use crate::resolve::{CommitTagResolver, Resolution};
use crate::tags::{GitTagSource, tag_date};
use tracing::{info, warn};

/// Execute the check from the current working directory and print the
/// report to stdout.
pub fn cmd_check(cli: &Cli) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let output = run_check(&ctx, cli)?;
    print!("{}", output);
    Ok(())
}

/// Run the check in `ctx` and return the rendered report.
pub fn run_check(ctx: &RepoContext, cli: &Cli) -> Result<String> {
    let config = ctx.load_config(cli.config.as_deref())?;
    let pattern = config.tag_pattern()?;
    let offset = cli.offset().unwrap_or(config.default_offset);
    let revision = cli.rev.as_deref().unwrap_or(&config.blame_revision);
    let limit = cli.limit.unwrap_or(config.display_limit);

    let diff = working_tree_diff(&ctx.cwd, &cli.file)?;
    info!(
        file = %cli.file,
        hunks = diff.hunks.len(),
        added = diff.added_total,
        removed = diff.removed_total,
        "parsed diff"
    );

    let resolution = if diff.is_empty() {
        Resolution::default()
    } else {
        let blame = blame_file(&ctx.cwd, revision, &cli.file)?;
        let tags = GitTagSource::new(&ctx.repo_root, pattern.glob());
        CommitTagResolver::new(&tags, &pattern, offset).resolve(&diff, &blame)?
    };

    let diagnostics = &resolution.diagnostics;
    if !diagnostics.skipped_lines.is_empty() {
        warn!(
            count = diagnostics.skipped_lines.len(),
            "some changed lines have no blame data at {}", revision
        );
    }
    if diagnostics.lines_past_end > 0 {
        warn!(
            count = diagnostics.lines_past_end,
            "some changed lines lie past the end of {} at {}", cli.file, revision
        );
    }
    if !diagnostics.malformed_tags.is_empty() {
        warn!(
            count = diagnostics.malformed_tags.len(),
            "ignored tags not matching {}<N>",
            pattern.prefix()
        );
    }

    let mut dates = TagDates::new();
    if cli.dates || config.show_dates {
        let date_limit = if cli.json { 0 } else { limit };
        for tag in displayed_tags(&resolution, date_limit) {
            if let Some(date) = tag_date(&ctx.repo_root, &tag.name)? {
                dates.insert(tag.name.clone(), date);
            }
        }
    }

    if cli.json {
        render_json(&cli.file, &diff, &resolution, &dates)
    } else {
        let options = ReportOptions {
            limit,
            show_hunks: cli.hunks,
        };
        Ok(render_text(&cli.file, &diff, &resolution, options, &dates))
    }
}
