//! Plain-text report.

use super::{ReportOptions, TagDates, truncate};
use crate::diff::Diff;
use crate::resolve::Resolution;
use crate::tags::MergeBaseTag;
use std::fmt::Write;

/// Render the human-readable report for `file`.
pub fn render_text(
    file: &str,
    diff: &Diff,
    resolution: &Resolution,
    options: ReportOptions,
    dates: &TagDates,
) -> String {
    let mut out = String::new();

    if diff.is_empty() {
        let _ = writeln!(out, "No changes in {}", file);
        return out;
    }

    if options.show_hunks {
        let _ = writeln!(
            out,
            "Hunks ({} added, {} removed):",
            diff.added_total, diff.removed_total
        );
        for hunk in &diff.hunks {
            for line in &hunk.text {
                let _ = writeln!(out, "\t{}", line);
            }
        }
    }

    let _ = writeln!(out, "Commits affected:");
    if resolution.is_empty() {
        let _ = writeln!(out, "\t(none)");
    }
    for affected in &resolution.commits {
        let lines: Vec<String> = affected.lines.iter().map(usize::to_string).collect();
        let _ = writeln!(out, "\t{}  lines {}", affected.commit, lines.join(", "));
    }

    let _ = writeln!(out, "Common tag:");
    if resolution.common_tags.is_empty() {
        let _ = writeln!(out, "\t(none)");
    } else {
        write_tags(&mut out, &resolution.common_tags, options.limit, dates);
    }

    if !resolution.partial.is_empty() {
        let _ = writeln!(out, "Tags by commit (* = shared by more than one commit):");
        for overlap in &resolution.partial {
            let _ = writeln!(out, "\t{}", overlap.commit);
            if overlap.tags.is_empty() {
                let _ = writeln!(out, "\t\t(none)");
                continue;
            }
            let (shown, hidden) = truncate(&overlap.tags, options.limit);
            for shared in shown {
                let marker = if shared.is_shared() {
                    format!(" * ({} commits)", shared.shared_by)
                } else {
                    String::new()
                };
                let _ = writeln!(
                    out,
                    "\t\t{}{}{}",
                    shared.tag,
                    date_suffix(&shared.tag, dates),
                    marker
                );
            }
            if hidden > 0 {
                let _ = writeln!(out, "\t\t... {} more", hidden);
            }
        }
    }

    out
}

fn write_tags(out: &mut String, tags: &[MergeBaseTag], limit: usize, dates: &TagDates) {
    let (shown, hidden) = truncate(tags, limit);
    for tag in shown {
        let _ = writeln!(out, "\t{}{}", tag, date_suffix(tag, dates));
    }
    if hidden > 0 {
        let _ = writeln!(out, "\t... {} more", hidden);
    }
}

fn date_suffix(tag: &MergeBaseTag, dates: &TagDates) -> String {
    dates
        .get(&tag.name)
        .map(|date| format!("  {}", date.format("%Y-%m-%d")))
        .unwrap_or_default()
}
