// src/output/summary.rs

use crate::constants;
use crate::core_types::AnalysisReport;
use log::debug;
use std::io::{self, Write};

/// Writes the summary section for a completed analysis.
///
/// A blank line and the summary header, then four bullets in a fixed order:
/// file name, lines, words, characters.
pub fn write_summary(writer: &mut dyn Write, report: &AnalysisReport) -> io::Result<()> {
    debug!("Writing summary for '{}'...", report.file_name);
    write!(writer, "\n{}\n", constants::SUMMARY_HEADER)?;
    writeln!(writer, "{} {}", constants::SUMMARY_NAME_LABEL, report.file_name)?;
    writeln!(writer, "{} {}", constants::SUMMARY_LINES_LABEL, report.lines)?;
    writeln!(writer, "{} {}", constants::SUMMARY_WORDS_LABEL, report.words)?;
    writeln!(writer, "{} {}", constants::SUMMARY_CHARS_LABEL, report.characters)?;
    writer.flush()
}
