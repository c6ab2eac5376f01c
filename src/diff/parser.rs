//! Core diff parsing logic.

use crate::error::{CheckDiffError, Result};
use std::io::Read;

use super::api::{Diff, HunkPair};
use super::helpers::{HUNK_PREFIX, parse_hunk_header};

/// Parse a unified diff from a byte stream.
///
/// The stream is read to the end; invalid UTF-8 is replaced rather than
/// rejected since only hunk headers are interpreted.
pub fn parse_diff<R: Read>(mut reader: R) -> Result<Diff> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| CheckDiffError::ParseError(format!("failed to read diff: {}", e)))?;

    parse_diff_str(&String::from_utf8_lossy(&buf))
}

/// Parse a unified diff from a string.
///
/// Carriage returns are stripped before splitting into lines. Lines before
/// the first hunk header (file headers, index lines) are ignored; lines
/// after a header are attached to that hunk's display text.
///
/// # Returns
///
/// * `Ok(Diff)` - Hunks in order of appearance with aggregate counts
/// * `Err(CheckDiffError::ParseError)` - A hunk header was malformed
pub fn parse_diff_str(diff_output: &str) -> Result<Diff> {
    let normalized = diff_output.replace('\r', "");
    let mut diff = Diff::default();
    let mut current: Option<HunkPair> = None;

    for line in normalized.split('\n') {
        if !line.starts_with(HUNK_PREFIX) {
            if let Some(hunk) = current.as_mut().filter(|_| !line.is_empty()) {
                hunk.text.push(line.to_string());
            }
            continue;
        }

        let (removed, added) = parse_hunk_header(line)?;
        if let Some(done) = current.replace(HunkPair {
            removed,
            added,
            text: vec![line.to_string()],
        }) {
            diff.push(done);
        }
    }

    if let Some(done) = current {
        diff.push(done);
    }

    Ok(diff)
}
