// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a file for buffered, line-by-line text reading.
/// A missing file maps to `FileNotFound`, anything else to `Io`.
pub(super) fn open_text_file(path: &Path) -> Result<TextLines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(TextLines::new(BufReader::new(file)))
}

/// Iterates over the lines of a byte stream, terminators stripped.
///
/// A line ends at `\n`, `\r`, or `\r\n`. A final line without a terminator is
/// still yielded, but a terminator at end of input does not start an empty
/// line. Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
pub(super) struct TextLines<R> {
    reader: R,
    chunk: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> TextLines<R> {
    pub(super) fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Reads up to the next `\n` and queues every line found in that chunk.
    /// Returns `false` at end of input.
    fn fill_pending(&mut self) -> io::Result<bool> {
        self.chunk.clear();
        if self.reader.read_until(b'\n', &mut self.chunk)? == 0 {
            return Ok(false);
        }

        let mut bytes = self.chunk.as_slice();
        let ends_with_newline = bytes.last() == Some(&b'\n');
        if ends_with_newline {
            bytes = &bytes[..bytes.len() - 1];
            if bytes.last() == Some(&b'\r') {
                bytes = &bytes[..bytes.len() - 1];
            }
        }

        let mut pieces = bytes.split(|&b| b == b'\r').peekable();
        while let Some(piece) = pieces.next() {
            let is_last = pieces.peek().is_none();
            // The piece after a trailing `\r` at end of input is not a line.
            if is_last && !ends_with_newline && piece.is_empty() {
                break;
            }
            self.pending
                .push_back(String::from_utf8_lossy(piece).into_owned());
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            match self.fill_pending() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
