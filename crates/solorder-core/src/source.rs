//! Raw source lines.
//!
//! The classifier never rewrites text: it moves [`SourceLine`]s between
//! categories. Each line keeps its 0-based index and byte offset so that
//! order can be checked and diagnostics can point back into the source.

use std::ops::Range;

/// One line of raw source text, without its terminating `\n`.
///
/// A carriage return preceding the newline is kept as part of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    index: usize,
    offset: usize,
    text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Create a source line.
    pub fn new(index: usize, offset: usize, text: &'a str) -> Self {
        Self {
            index,
            offset,
            text,
        }
    }

    /// 0-based line index in the original file.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the first character of this line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The line text as it appears in the source.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The line text with surrounding whitespace removed.
    pub fn stripped(&self) -> &'a str {
        self.text.trim()
    }

    /// Byte range covered by this line in the source.
    pub fn byte_range(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}

/// Split source text into lines on `\n`.
///
/// Text ending with a newline yields a final empty line, and empty text
/// yields a single empty line, so joining the lines with `\n` restores the
/// input exactly.
///
/// # Example
///
/// ```
/// # use solorder_core::source::split_lines;
/// let lines: Vec<_> = split_lines("a\nb\n").map(|l| l.text()).collect();
/// assert_eq!(lines, ["a", "b", ""]);
/// ```
pub fn split_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(index, text)| {
        let line = SourceLine::new(index, offset, text);
        offset += text.len() + 1;
        line
    })
}
