//! Birthday list parsing.
//!
//! The input format is one entry per line: `Name - MM/DD/YYYY` (or
//! `YYYY/MM/DD`). The separator is the literal `" - "`. Validation is
//! deliberately loose: lines that do not split into exactly two parts are
//! dropped without an error, matching the best-effort nature of the source
//! data.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// A raw birthday record as read from the input file.
///
/// The date is kept as the raw string; normalization happens later so one
/// bad date never prevents the rest of the file from being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayEntry {
    /// The person's name, trimmed of surrounding whitespace.
    pub name: String,
    /// The raw date string, trimmed of surrounding whitespace.
    pub raw_date: String,
}

impl BirthdayEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, raw_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_date: raw_date.into(),
        }
    }
}

/// The literal separator between the name and the date.
const SEPARATOR: &str = " - ";

/// Reads a birthday file and parses it into entries.
///
/// The file is read fully; the result is a plain `Vec` in file order.
pub fn parse_birthday_file(path: impl AsRef<Path>) -> io::Result<Vec<BirthdayEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries = parse_birthday_lines(&content);
    debug!(
        "parsed {} entries from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries)
}

/// Parses birthday entries from raw text, one entry per line.
///
/// Empty and whitespace-only lines are skipped. A line is accepted only if
/// splitting on `" - "` yields exactly two parts; anything else is silently
/// discarded. Both parts are trimmed.
pub fn parse_birthday_lines(content: &str) -> Vec<BirthdayEntry> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut parts = line.split(SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(name), Some(date), None) => {
                    Some(BirthdayEntry::new(name.trim(), date.trim()))
                }
                _ => {
                    debug!("discarding malformed line: {:?}", line);
                    None
                }
            }
        })
        .collect()
}
