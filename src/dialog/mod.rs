//! Interactive seams: choosing a file and telling the user about failures.
//!
//! Both are blocking "present, then wait for the user" operations. The
//! [`terminal`] backend works anywhere with a console; the `native` backend
//! (behind the `gui` feature) uses the platform's own dialogs.

use crate::errors::Result;
use std::path::{Path, PathBuf};

#[cfg(feature = "gui")]
pub mod native;
pub mod terminal;

#[cfg(feature = "gui")]
pub use native::{NativeNotifier, NativePicker};
pub use terminal::{StderrNotifier, TerminalPicker};

/// Presents a modal file chooser and blocks until the user answers.
pub trait FilePicker {
    /// Asks the user for a file, starting in `start_dir`.
    ///
    /// Returns `Ok(None)` when the user dismisses the chooser.
    fn pick_file(&mut self, title: &str, start_dir: &Path) -> Result<Option<PathBuf>>;
}

/// Shows a blocking error notification to the user.
pub trait Notifier {
    fn notify_error(&self, title: &str, message: &str);
}
