// src/constants.rs

/// Title of the file picker.
pub const PICKER_TITLE: &str = "Select a text file to inspect";

/// Title of the error dialog shown when analysis fails.
pub const ERROR_TITLE: &str = "Error";

/// Subdirectory of the working directory the picker prefers to start in.
pub const PREFERRED_SUBDIR: &str = "src";

/// Printed before the file name once a file has been chosen.
pub const PROCESSING_PREFIX: &str = "Processing file:";

/// Printed when the picker is dismissed.
pub const CANCELLED_MESSAGE: &str = "File selection cancelled.";

/// Header printed before the echoed file content.
pub const CONTENT_HEADER: &str = "--- File Content ---";

/// Header printed before the summary bullets.
pub const SUMMARY_HEADER: &str = "--- Summary Report ---";

pub const SUMMARY_NAME_LABEL: &str = "• The name of the file the user chose to process:";
pub const SUMMARY_LINES_LABEL: &str = "• Number of lines in the file:";
pub const SUMMARY_WORDS_LABEL: &str = "• Number of words in the file:";
pub const SUMMARY_CHARS_LABEL: &str = "• Number of characters in the file:";
