// src/output/mod.rs

//! Console output for everything the run prints to stdout.
//!
//! The echoed file content is written by the analyzer as it reads; this module
//! covers the lines around it: the selection outcome and the summary report.

use crate::constants;
use crate::core_types::Selection;
use std::io::{self, Write};

pub mod summary;

pub use summary::write_summary;

/// Writes the line announcing the selection outcome.
///
/// `Processing file: <name>` for a chosen file, `File selection cancelled.`
/// otherwise.
pub fn write_selection(writer: &mut dyn Write, selection: &Selection) -> io::Result<()> {
    match selection {
        Selection::Chosen(file) => writeln!(
            writer,
            "{} {}",
            constants::PROCESSING_PREFIX,
            file.display_name()
        ),
        Selection::Cancelled => writeln!(writer, "{}", constants::CANCELLED_MESSAGE),
    }
}
