// src/processing/counter.rs

use crate::core_types::AnalysisReport;

/// Running line, word and character counts, fed one stripped line at a time.
///
/// The counting rules are:
///
/// - **Lines**: one per line fed in, blank or not.
/// - **Words**: maximal runs of non-whitespace characters. A whitespace-only
///   line adds nothing.
/// - **Characters**: the number of `char`s in each line, terminator excluded.
///   Characters outside the Basic Multilingual Plane (e.g. emoji) count once,
///   not as two UTF-16 code units. The total is a `u64` so very large files
///   cannot overflow it.
///   When the tally is finished, one character is added per line boundary
///   (`lines - 1`) to stand in for the stripped line breaks. The final line's
///   terminator, if any, is never counted, so this approximates the file size
///   rather than measuring it.
///
/// # Examples
///
/// ```
/// use file_inspector::processing::LineTally;
///
/// let mut tally = LineTally::default();
/// for line in ["hello world", "foo", "", "bar baz qux"] {
///     tally.record(line);
/// }
/// let report = tally.into_report("sample.txt");
/// assert_eq!(report.lines, 4);
/// assert_eq!(report.words, 6);
/// assert_eq!(report.characters, 28);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    lines: usize,
    words: usize,
    characters: u64,
}

impl LineTally {
    /// Adds one line, with its terminator already stripped.
    #[inline]
    pub fn record(&mut self, line: &str) {
        self.lines += 1;
        self.characters += line.chars().count() as u64;
        self.words += line.split_whitespace().count();
    }

    /// Number of lines recorded so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Finishes the tally, applying the line-boundary adjustment.
    pub fn into_report(self, file_name: impl Into<String>) -> AnalysisReport {
        let boundaries = self.lines.saturating_sub(1) as u64;
        AnalysisReport {
            file_name: file_name.into(),
            lines: self.lines,
            words: self.words,
            characters: self.characters + boundaries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(content: &str) -> AnalysisReport {
        let mut tally = LineTally::default();
        content.lines().for_each(|line| tally.record(line));
        tally.into_report("test.txt")
    }

    #[test]
    fn test_counts_basic() {
        let report = tally_of("One two three.\nFour five.\n");
        assert_eq!(report.lines, 2);
        assert_eq!(report.words, 5);
        // 14 + 10 stripped, plus one boundary. The trailing newline is not counted.
        assert_eq!(report.characters, 25);
    }

    #[test]
    fn test_counts_empty() {
        let report = tally_of("");
        assert_eq!(report.lines, 0);
        assert_eq!(report.words, 0);
        assert_eq!(report.characters, 0);
    }

    #[test]
    fn test_whitespace_only_line_counts_as_line_but_not_word() {
        let report = tally_of("  \t ");
        assert_eq!(report.lines, 1);
        assert_eq!(report.words, 0);
        assert_eq!(report.characters, 4);
    }

    #[test]
    fn test_blank_lines_count_as_lines() {
        let report = tally_of("a\n\n\nb");
        assert_eq!(report.lines, 4);
        assert_eq!(report.words, 2);
        assert_eq!(report.characters, 2 + 3);
    }

    #[test]
    fn test_multiple_spaces_and_tabs() {
        let report = tally_of("  One   two \t three  ");
        assert_eq!(report.lines, 1);
        assert_eq!(report.words, 3);
        assert_eq!(report.characters, 21);
    }

    #[test]
    fn test_characters_are_counted_not_bytes() {
        let report = tally_of("héllo wörld");
        assert_eq!(report.characters, 11);
        assert_eq!(report.words, 2);
    }

    #[test]
    fn test_astral_characters_count_once() {
        let report = tally_of("a\u{1F600}b");
        assert_eq!(report.characters, 3);
        assert_eq!(report.words, 1);
    }

    #[test]
    fn test_file_name_is_carried_into_report() {
        let mut tally = LineTally::default();
        tally.record("x");
        assert_eq!(tally.lines(), 1);
        assert_eq!(tally.into_report("name.txt").file_name, "name.txt");
    }
}
