//! Immutable document snapshots.
//!
//! A [`Document`] is built once per scan from the editor's current text. It is backed by a
//! [`Rope`], so line access and offset conversion are O(log N). Lines are split on `\n` only:
//! a trailing `\r` (or any other Unicode line separator) stays part of the line text.

use crate::diagnostics::DiagnosticRange;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;

/// A single logical line of a [`Document`] (without its trailing `\n`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLine<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Character offset of the first character of the line.
    pub start: usize,
    /// Line text, excluding the newline.
    pub text: Cow<'a, str>,
}

impl DocumentLine<'_> {
    /// Length of the line in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset one past the last character of the line.
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }

    /// The whole line as a document range.
    pub fn range(&self) -> DiagnosticRange {
        DiagnosticRange::new(self.start, self.end())
    }

    /// Map a byte range within the line text (e.g. a regex match) to a document range.
    ///
    /// Byte offsets are clamped to the line and snapped down to a char boundary.
    pub fn byte_range(&self, start_byte: usize, end_byte: usize) -> DiagnosticRange {
        let start = self.start + self.chars_before(start_byte);
        let end = self.start + self.chars_before(end_byte);
        DiagnosticRange::new(start.min(end), end)
    }

    fn chars_before(&self, byte: usize) -> usize {
        let mut byte = byte.min(self.text.len());
        while !self.text.is_char_boundary(byte) {
            byte -= 1;
        }
        self.text[..byte].chars().count()
    }
}

/// Immutable text snapshot with a line index.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Build a document from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total length in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total length in bytes.
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Returns `true` for the empty document.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of lines. The empty document has one (empty) line, and a document ending in
    /// `\n` has a final empty line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Character offset at which `line` starts (clamped to the document length).
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Text of `line` without its newline.
    pub fn line_text(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        Some(strip_newline(self.rope.line(line)))
    }

    /// Iterate over all lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = DocumentLine<'_>> + '_ {
        let mut start = 0;
        self.rope.lines().enumerate().map(move |(index, slice)| {
            let line_start = start;
            start += slice.len_chars();
            DocumentLine {
                index,
                start: line_start,
                text: strip_newline(slice),
            }
        })
    }

    /// Convert a character offset into `(line, column)` (both zero-based, column in chars).
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        (line, char_offset - self.rope.line_to_char(line))
    }

    /// Convert `(line, column)` into a character offset, clamping the column to the line.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(line);
        let line_len = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - line_start - 1
        } else {
            self.rope.len_chars() - line_start
        };

        line_start + column.min(line_len)
    }

    /// Convert a UTF-16 code unit column on `line` into a character column.
    ///
    /// External linters (ESLint, LSP servers) report UTF-16 columns.
    pub fn utf16_to_char_column(&self, line: usize, utf16_column: usize) -> usize {
        let Some(text) = self.line_text(line) else {
            return 0;
        };

        let mut units = 0;
        for (col, ch) in text.chars().enumerate() {
            if units >= utf16_column {
                return col;
            }
            units += ch.len_utf16();
        }
        text.chars().count()
    }

    /// The complete text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

fn strip_newline(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match Cow::from(slice) {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_suffix('\n').unwrap_or(s)),
        Cow::Owned(mut s) => {
            if s.ends_with('\n') {
                s.pop();
            }
            Cow::Owned(s)
        }
    }
}
