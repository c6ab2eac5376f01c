//! Helper functions for hunk header parsing.

use super::api::LineRange;
use crate::error::{CheckDiffError, Result};

/// Marker that starts every hunk header.
pub(super) const HUNK_PREFIX: &str = "@@ -";

/// Parse a hunk header line into its (removed, added) ranges.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@[ context]".
/// The line is split on single spaces and must yield at least four tokens:
/// the opening marker, both range specs and the closing marker. Anything
/// after the closing marker (usually the enclosing function) is ignored.
pub(super) fn parse_hunk_header(line: &str) -> Result<(LineRange, LineRange)> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < 4 {
        return Err(CheckDiffError::ParseError(format!(
            "invalid hunk header: '{}'",
            line
        )));
    }

    let removed = parse_range_spec(tokens[1], '-')?;
    let added = parse_range_spec(tokens[2], '+')?;
    Ok((removed, added))
}

/// Parse a single range spec such as `-16,0`, `+298` or `-1`.
///
/// `prefix` is the marker the token must start with (`-` for the old file,
/// `+` for the new one). Without a comma the count is 1, the unified diff
/// convention for a single-line range. A range whose end would overflow
/// is rejected.
pub fn parse_range_spec(token: &str, prefix: char) -> Result<LineRange> {
    let range = token.strip_prefix(prefix).ok_or_else(|| {
        CheckDiffError::ParseError(format!(
            "range '{}' does not start with '{}'",
            token, prefix
        ))
    })?;

    let (start, count) = match range.split_once(',') {
        Some((start, count)) => (parse_number(start, token)?, parse_number(count, token)?),
        None => (parse_number(range, token)?, 1),
    };

    // Attribution walks up to start + count; keep that representable.
    if start.checked_add(count).is_none() {
        return Err(CheckDiffError::ParseError(format!(
            "range '{}' extends past the largest line number",
            token
        )));
    }

    Ok(LineRange::new(start, count))
}

/// Parse a decimal line number. Signs are rejected so "+5" or "-5" inside a
/// range never parse.
fn parse_number(digits: &str, token: &str) -> Result<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckDiffError::ParseError(format!(
            "'{}' is not a valid line number in range '{}'",
            digits, token
        )));
    }
    digits.parse().map_err(|e| {
        CheckDiffError::ParseError(format!(
            "'{}' is not a valid line number in range '{}': {}",
            digits, token, e
        ))
    })
}
