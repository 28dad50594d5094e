// src/dialog/terminal.rs

//! Console fallbacks for headless environments.

use super::{FilePicker, Notifier};
use crate::errors::{Error, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Prompts for a path on one stream and reads the answer from another.
///
/// A blank answer or end of input means the user cancelled. Only the line
/// terminator is stripped, so spaces in file names survive. A relative answer
/// is resolved against the start directory.
///
/// # Examples
///
/// ```
/// use file_inspector::dialog::{FilePicker, TerminalPicker};
/// use std::path::Path;
///
/// let mut prompt = Vec::new();
/// let mut picker = TerminalPicker::new("notes.txt\n".as_bytes(), &mut prompt);
/// let picked = picker.pick_file("Pick one", Path::new("/work")).unwrap();
/// assert_eq!(picked, Some(Path::new("/work/notes.txt").to_path_buf()));
/// ```
pub struct TerminalPicker<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl TerminalPicker<io::StdinLock<'static>, io::Stderr> {
    /// Reads from stdin and prompts on stderr, leaving stdout for the report.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> FilePicker for TerminalPicker<R, W> {
    fn pick_file(&mut self, title: &str, start_dir: &Path) -> Result<Option<PathBuf>> {
        write!(
            self.prompt,
            "{}\n  (in {}, leave blank to cancel)\n> ",
            title,
            start_dir.display()
        )
        .and_then(|_| self.prompt.flush())
        .map_err(Error::Prompt)?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).map_err(Error::Prompt)?;
        let answer = answer.trim_end_matches(&['\r', '\n'][..]);
        if read == 0 || answer.trim().is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(answer);
        if path.is_absolute() {
            Ok(Some(path))
        } else {
            Ok(Some(start_dir.join(path)))
        }
    }
}

/// Writes error notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}
