//! Defines the data passed between the selection, analysis and output stages.
//!
//! A [`Selection`] comes out of the file selector, a [`FileReference`] is
//! consumed by the analyzer, and an [`AnalysisReport`] is what gets printed.

use std::path::{Path, PathBuf};

/// A file chosen by the user.
///
/// Immutable once created; the analyzer only borrows it.
///
/// # Examples
///
/// ```
/// use file_inspector::core_types::FileReference;
///
/// let file = FileReference::new("/home/user/notes/todo.txt");
/// assert_eq!(file.display_name(), "todo.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    path: PathBuf,
}

impl FileReference {
    /// Creates a reference to `path`, which may be absolute or relative.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path as chosen.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The final path component, used in console output and error messages.
    /// Falls back to the whole path when there is no file name (e.g. `..`).
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// The final component of `path`, or the whole path when it has none.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The result of running the file selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user confirmed a file.
    Chosen(FileReference),
    /// The user dismissed the picker. This is a normal outcome, not an error.
    Cancelled,
}

/// Line, word and character counts for one analyzed file.
///
/// Built by [`LineTally::into_report`](crate::processing::LineTally::into_report)
/// once the whole file has been read, and never changed afterwards.
///
/// # Examples
///
/// ```
/// use file_inspector::core_types::AnalysisReport;
///
/// let report = AnalysisReport {
///     file_name: "empty.txt".to_string(),
///     lines: 0,
///     words: 0,
///     characters: 0,
/// };
/// assert_eq!(report.characters, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// The display name of the analyzed file.
    pub file_name: String,
    /// The number of lines read.
    pub lines: usize,
    /// The number of whitespace-delimited words.
    pub words: usize,
    /// Characters in all lines plus one per line boundary.
    pub characters: u64,
}
