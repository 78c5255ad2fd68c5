//! Position tracking for source buffers
//!
//! Maps byte offsets to line/column coordinates so the scanner can walk
//! comments line by line and the converter can report where a failing
//! definition lives.

use text_size::TextSize;

/// A position in source code (0-indexed, column in bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Line start table for one source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line; always starts with 0
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(i, _)| TextSize::new((i + 1) as u32)),
        );
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset into a line/column position.
    ///
    /// Offsets past the end clamp to the end of the buffer.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let column = u32::from(offset - self.line_starts[line]) as usize;
        Position::new(line, column)
    }
}
