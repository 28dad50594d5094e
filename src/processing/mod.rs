//! Handles the analysis stage: reading the chosen file, echoing it, and counting.
//!
//! The file is read sequentially, one line at a time. Each line is written to
//! the console as soon as it is read, then folded into a [`LineTally`]. The
//! report is only built once the whole file has been consumed.

use crate::constants;
use crate::core_types::{AnalysisReport, FileReference};
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::io::Write;

mod content_reader;
mod counter;

use content_reader::open_text_file;
pub use counter::LineTally;

/// Reads `file`, echoing each line to `out`, and returns its counts.
///
/// The content header is written once the file has been opened, followed by
/// every line in read order. Each line is flushed immediately so the echo is
/// live rather than a dump at the end.
///
/// # Errors
/// - [`Error::FileNotFound`] if the file does not exist when opened.
/// - [`Error::Io`] for any other open or read failure.
///
/// Lines end at `\n`, `\r` or `\r\n`. Invalid UTF-8 is decoded lossily.
/// - [`Error::Output`] if writing to `out` fails.
///
/// On error the counts gathered so far are dropped, and the file handle is
/// closed on every path.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.display_name()))]
pub fn analyze(file: &FileReference, out: &mut dyn Write) -> Result<AnalysisReport> {
    let lines = open_text_file(file.path())?;
    debug!("Opened '{}' for reading.", file.path().display());

    writeln!(out, "\n{}", constants::CONTENT_HEADER).map_err(Error::Output)?;

    let mut tally = LineTally::default();
    for line in lines {
        let line = line.map_err(|e| io_error_with_path(e, file.path()))?;
        writeln!(out, "{line}").map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;
        tally.record(&line);
    }

    debug!("Read {} lines from '{}'.", tally.lines(), file.path().display());
    Ok(tally.into_report(file.display_name()))
}
