//! In-memory representation of one discovered script
//!
//! A `ScriptFile` pairs a file's content with a line-offset table so that
//! tree-sitter row positions can be converted to byte-exact line slices.
//! Immutable once constructed.

use std::path::PathBuf;

/// One discovered shell script, read fully into memory
#[derive(Debug, Clone)]
pub struct ScriptFile {
    /// Absolute (or as-discovered) filesystem path
    pub path: PathBuf,
    /// Path form used in index records, relative to the scanned root
    pub display_path: String,
    content: String,
    /// Byte offset of each line start; `line_offsets[0] == 0`
    line_offsets: Vec<usize>,
}

impl ScriptFile {
    pub fn new(path: PathBuf, display_path: String, content: String) -> Self {
        let mut line_offsets = vec![0];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(i + 1);
            }
        }
        Self {
            path,
            display_path,
            content,
            line_offsets,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting a final unterminated line
    pub fn line_count(&self) -> usize {
        match self.line_offsets.last() {
            Some(&offset) if offset >= self.content.len() && offset > 0 => {
                self.line_offsets.len() - 1
            }
            _ => self.line_offsets.len(),
        }
    }

    /// A single 1-based line without its trailing newline
    pub fn line(&self, number: usize) -> Option<&str> {
        if number == 0 || number > self.line_count() {
            return None;
        }
        Some(self.slice_lines(number, number))
    }

    /// Byte-exact slice over an inclusive 1-based line range.
    ///
    /// The final newline of `end` is excluded, so for a span that covers a
    /// syntax node occupying whole lines the result equals the node text.
    pub fn slice_lines(&self, start: usize, end: usize) -> &str {
        debug_assert!(start >= 1 && start <= end);
        let begin = self.line_offsets[start - 1];
        let stop = self
            .line_offsets
            .get(end)
            .map(|offset| offset - 1)
            .unwrap_or(self.content.len());
        let slice = &self.content[begin..stop];
        slice.strip_suffix('\r').unwrap_or(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(content: &str) -> ScriptFile {
        ScriptFile::new(
            PathBuf::from("/tmp/test.sh"),
            "test.sh".to_string(),
            content.to_string(),
        )
    }

    #[test]
    fn test_line_count_with_trailing_newline() {
        assert_eq!(script("a\nb\nc\n").line_count(), 3);
    }

    #[test]
    fn test_line_count_without_trailing_newline() {
        assert_eq!(script("a\nb\nc").line_count(), 3);
    }

    #[test]
    fn test_single_lines() {
        let s = script("first\nsecond\nthird\n");
        assert_eq!(s.line(1), Some("first"));
        assert_eq!(s.line(2), Some("second"));
        assert_eq!(s.line(3), Some("third"));
        assert_eq!(s.line(4), None);
        assert_eq!(s.line(0), None);
    }

    #[test]
    fn test_slice_spans_multiple_lines() {
        let s = script("one\ntwo\nthree\nfour\n");
        assert_eq!(s.slice_lines(2, 3), "two\nthree");
        assert_eq!(s.slice_lines(1, 4), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn test_slice_last_line_unterminated() {
        let s = script("one\ntwo");
        assert_eq!(s.slice_lines(2, 2), "two");
    }

    #[test]
    fn test_slice_handles_crlf() {
        let s = script("one\r\ntwo\r\n");
        assert_eq!(s.line(1), Some("one"));
        assert_eq!(s.line(2), Some("two"));
    }

    #[test]
    fn test_empty_file() {
        let s = script("");
        assert_eq!(s.line_count(), 1);
        assert_eq!(s.line(1), Some(""));
    }
}
