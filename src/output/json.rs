//! JSON output formatting

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::Entry;
use crate::select::{OrderingPolicy, Totals};

#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub path: &'a Path,
    pub name: &'a str,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl<'a> From<&'a Entry> for JsonEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            path: entry.path(),
            name: entry.name(),
            size: entry.size(),
            modified: entry.modified().into(),
        }
    }
}

/// Whole report: ranked entries plus totals over everything walked.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub sort: &'static str,
    pub reverse: bool,
    pub entries: Vec<JsonEntry<'a>>,
    pub totals: Totals,
}

impl<'a> JsonReport<'a> {
    pub fn new(policy: OrderingPolicy, entries: &'a [Entry], totals: Totals) -> Self {
        Self {
            sort: policy.key().as_str(),
            reverse: policy.is_reversed(),
            entries: entries.iter().map(JsonEntry::from).collect(),
            totals,
        }
    }
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(report: &JsonReport<'_>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    writeln!(io::stdout().lock(), "{}", json)
}
