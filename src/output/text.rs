//! Plain-text formatter for ranked results

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::Entry;
use crate::select::Totals;

use super::config::OutputConfig;
use super::utils::{format_bytes, format_number, ranked_value};

/// Writes one line per ranked entry followed by a totals line.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write the report to stdout, colored if configured.
    ///
    /// `use_color` is final here; terminal and environment detection happen
    /// when the config is built.
    pub fn print(&self, entries: &[Entry], totals: Totals) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut lock = stdout.lock();
        self.write(&mut lock, entries, totals)?;
        lock.flush()
    }

    pub fn write<W: WriteColor>(&self, out: &mut W, entries: &[Entry], totals: Totals) -> io::Result<()> {
        let mut value_color = ColorSpec::new();
        value_color.set_fg(Some(Color::Cyan));

        for entry in entries {
            out.set_color(&value_color)?;
            write!(out, "{}", ranked_value(entry, self.config.key))?;
            out.reset()?;
            writeln!(out, " {}", entry.path().display())?;
        }

        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        out.set_color(&bold)?;
        write!(
            out,
            "{} files ({})",
            format_number(totals.num_entries),
            format_bytes(totals.sum_size)
        )?;
        out.reset()?;
        writeln!(out)
    }
}
