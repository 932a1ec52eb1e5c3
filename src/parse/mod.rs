//! Text input parsing
//!
//! Both input files are line oriented. Blank lines and lines starting with
//! `#` are skipped; every other line is one record.

pub mod games;
pub mod roster;

pub use games::{parse_game_result, parse_games};
pub use roster::parse_roster;

use crate::error::LadderError;

/// Non-empty, non-comment lines with their 1-based line numbers
pub(crate) fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Split off the first whitespace-delimited token, returning it and the trimmed rest
pub(crate) fn split_token(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(end) => (&line[..end], line[end..].trim_start()),
        None => (line, ""),
    }
}

pub(crate) fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> anyhow::Error {
    LadderError::MalformedRecord {
        source_name: source_name.to_string(),
        line,
        reason: reason.into(),
    }
    .into()
}
