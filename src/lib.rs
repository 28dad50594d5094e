//! `file_inspector` lets a user pick a text file, echoes its contents to the
//! console, and prints a short summary report: line, word and character counts.
//!
//! The run is a two-stage pipeline:
//! 1.  **Select**: ask the user for a file through a [`FilePicker`], starting in
//!     `./src` when it exists. Dismissing the picker ends the run quietly.
//! 2.  **Analyze**: read the file line by line, echo each line as it is read,
//!     tally the counts, and print the summary.
//!
//! Failures to open or read the file are reported to the user through a
//! [`Notifier`] and logged, and never escape [`run`].
//!
//! # Example: Library Usage
//!
//! ```
//! use file_inspector::{run, Config, Interaction, Outcome};
//! use file_inspector::dialog::{StderrNotifier, TerminalPicker};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("poem.txt"), "roses are red\nviolets are blue").unwrap();
//!
//! let config = Config::for_working_dir(temp_dir.path(), Interaction::Terminal);
//!
//! // Answer the picker's prompt with a path relative to the start directory.
//! let mut picker = TerminalPicker::new("poem.txt\n".as_bytes(), std::io::sink());
//! let mut out = Vec::new();
//! let outcome = run(&config, &mut picker, &StderrNotifier, &mut out).unwrap();
//!
//! let Outcome::Reported(report) = outcome else { panic!("expected a report") };
//! assert_eq!(report.lines, 2);
//! assert_eq!(report.words, 6);
//! assert_eq!(report.characters, 30);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod dialog;
pub mod errors;
pub mod output;
pub mod processing;
pub mod selector;

// Re-export key public types for easier use as a library
pub use config::{Config, Interaction};
pub use core_types::{AnalysisReport, FileReference, Selection};
pub use dialog::{FilePicker, Notifier};
pub use errors::{Error, Result};
pub use processing::analyze;
pub use selector::select_file;

use std::io::Write;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The user dismissed the picker; nothing was analyzed.
    Cancelled,
    /// The file was analyzed and the summary printed.
    Reported(AnalysisReport),
    /// The file could not be opened or read. The user was notified and no
    /// summary was printed.
    Failed(Error),
}

/// Executes a complete run: select a file, then analyze and report on it.
///
/// Everything meant for the console goes to `out`: the selection line, the
/// echoed content, and the summary. Analysis failures (`FileNotFound`, `Io`)
/// are shown through `notifier`, logged, and returned as [`Outcome::Failed`].
///
/// # Errors
/// Returns an error only if the picker fails or writing to `out` fails.
pub fn run(
    config: &Config,
    picker: &mut dyn FilePicker,
    notifier: &dyn Notifier,
    out: &mut dyn Write,
) -> Result<Outcome> {
    log::debug!("Starting selection in '{}'", config.start_dir.display());
    let selection = select_file(picker, &config.start_dir)?;
    output::write_selection(out, &selection).map_err(Error::Output)?;

    let file = match selection {
        Selection::Chosen(file) => file,
        Selection::Cancelled => return Ok(Outcome::Cancelled),
    };

    match analyze(&file, out) {
        Ok(report) => {
            output::write_summary(out, &report).map_err(Error::Output)?;
            Ok(Outcome::Reported(report))
        }
        Err(e) if e.is_analysis_failure() => {
            log::error!("Failed to analyze '{}': {:?}", file.path().display(), e);
            notifier.notify_error(constants::ERROR_TITLE, &e.to_string());
            Ok(Outcome::Failed(e))
        }
        Err(e) => Err(e),
    }
}
