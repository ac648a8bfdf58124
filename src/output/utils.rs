//! Shared utility functions for output formatting

use std::time::SystemTime;

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};

use crate::entry::Entry;
use crate::select::SortKey;

/// Timestamp layout for the date column. `%z` is the numeric UTC offset
/// (`+0100`); chrono has no zone abbreviations for local time.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format a size in bytes with decimal (kB, MB, GB) units.
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format a modification time in the local timezone.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIME_FORMAT).to_string()
}

/// The attribute an entry was ranked by, formatted and padded for the
/// first column.
pub fn ranked_value(entry: &Entry, key: SortKey) -> String {
    match key {
        SortKey::Size => format!("{:>10}", format_bytes(entry.size())),
        SortKey::Date => format_timestamp(entry.modified()),
        SortKey::Name => format!("{:>20}", entry.name()),
    }
}
