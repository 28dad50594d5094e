// src/dialog/native.rs

//! Native dialogs via `rfd`. Each call blocks until the dialog is closed.

use super::{FilePicker, Notifier};
use crate::errors::Result;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

/// Opens the platform's file-open dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePicker;

impl FilePicker for NativePicker {
    fn pick_file(&mut self, title: &str, start_dir: &Path) -> Result<Option<PathBuf>> {
        log::debug!("Opening native file dialog in '{}'", start_dir.display());
        Ok(FileDialog::new()
            .set_title(title)
            .set_directory(start_dir)
            .pick_file())
    }
}

/// Shows a modal error message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeNotifier;

impl Notifier for NativeNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
