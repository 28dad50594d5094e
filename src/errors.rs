//! Defines application-specific error types.
//!
//! The `Error` enum separates the two analysis failures the user is told about
//! (`FileNotFound` and `Io`) from failures of the console or prompt itself,
//! which abort the run.

use crate::core_types::display_name;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A specialized `Result` type for `file_inspector` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while selecting, reading or reporting on a file.
#[derive(Error, Debug)]
pub enum Error {
    /// The chosen file vanished or could not be found when it was opened.
    #[error("File not found: {}", display_name(.path))]
    FileNotFound {
        /// The path that could not be opened.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },

    /// Any other failure while opening or reading the chosen file.
    #[error("Error reading file: {source}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: io::Error,
    },

    /// The terminal file prompt could not be read.
    #[error("Failed to read file selection: {0}")]
    Prompt(#[source] io::Error),

    /// Writing to the console failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Returns `true` for the failures that are reported to the user and end
    /// the analysis without ending the program.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(self, Error::FileNotFound { .. } | Error::Io { .. })
    }
}

/// Classifies an I/O error raised while opening or reading `path`.
///
/// `NotFound` becomes [`Error::FileNotFound`], everything else [`Error::Io`].
pub fn io_error_with_path<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    let path = path.as_ref().to_path_buf();
    if source.kind() == io::ErrorKind::NotFound {
        Error::FileNotFound { path, source }
    } else {
        Error::Io { path, source }
    }
}
