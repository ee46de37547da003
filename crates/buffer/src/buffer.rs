use crate::{BufferError, LinePosition, NEWLINE};

/// In-memory document: raw bytes plus a cursor offset.
///
/// The cursor sits between two bytes and always satisfies
/// `0 <= cursor <= len`. Every fallible operation either succeeds or
/// leaves the buffer exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    /// Document bytes
    content: Vec<u8>,
    /// Offset before which the next byte is inserted
    cursor: usize,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create buffer from existing bytes with the cursor at `cursor`.
    pub fn from_bytes(content: impl Into<Vec<u8>>, cursor: usize) -> Result<Self, BufferError> {
        let content = content.into();
        if cursor > content.len() {
            return Err(BufferError::CursorOutOfRange {
                cursor,
                len: content.len(),
            });
        }
        Ok(Self { content, cursor })
    }

    /// Create buffer from existing bytes with the cursor at the append position
    pub fn from_bytes_at_end(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self { content, cursor }
    }

    /// Get all bytes
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get cursor offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Consume the buffer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    /// Number of lines; an empty buffer has one empty line
    pub fn line_count(&self) -> usize {
        self.content.iter().filter(|&&b| b == NEWLINE).count() + 1
    }

    /// Iterate over lines without their terminators
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.content.split(|&b| b == NEWLINE)
    }

    /// Cursor as line and column
    pub fn position(&self) -> LinePosition {
        let line = self.content[..self.cursor]
            .iter()
            .filter(|&&b| b == NEWLINE)
            .count();
        LinePosition::at(line, self.cursor - self.line_start(self.cursor))
    }

    /// Insert a byte at the cursor and advance past it.
    pub fn insert(&mut self, byte: u8) {
        self.content.insert(self.cursor, byte);
        self.cursor += 1;
    }

    /// Insert several bytes in order, as repeated [`TextBuffer::insert`] calls.
    pub fn insert_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.insert(byte);
        }
    }

    /// Delete the byte before the cursor (backspace)
    pub fn delete(&mut self) -> Result<(), BufferError> {
        if self.cursor == 0 {
            return Err(BufferError::CannotDelete);
        }
        self.content.remove(self.cursor - 1);
        self.cursor -= 1;
        Ok(())
    }

    pub fn move_cursor_left(&mut self) -> Result<(), BufferError> {
        if self.cursor == 0 {
            return Err(BufferError::CannotMoveLeft);
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Move right by one byte. The end of the buffer is a valid stop.
    pub fn move_cursor_right(&mut self) -> Result<(), BufferError> {
        if self.cursor >= self.content.len() {
            return Err(BufferError::CannotMoveRight);
        }
        self.cursor += 1;
        Ok(())
    }

    /// Move to the same column of the previous line.
    ///
    /// Fails on the first line, and when the previous line is shorter than
    /// the current column. The cursor is never clamped to a shorter line.
    pub fn move_cursor_up(&mut self) -> Result<(), BufferError> {
        let line_start = self.line_start(self.cursor);
        if line_start == 0 {
            return Err(BufferError::CannotMoveUp);
        }
        let before = self.cursor - line_start;

        // line_start - 1 is the terminator of the previous line
        let previous_start = self.line_start(line_start - 1);
        let previous_line_length = line_start - 1 - previous_start;
        if previous_line_length < before {
            return Err(BufferError::CannotMoveUp);
        }

        self.cursor = previous_start + before;
        Ok(())
    }

    /// Move down by skipping the rest of the line plus the backward scan
    /// distance.
    ///
    /// The backward scan counts the terminator behind the cursor, so below
    /// the first line the target keeps the column. On the first line there
    /// is no terminator to count and the target is one column to the left.
    /// Fails only when the target is at or past the end of the buffer; a
    /// target inside the buffer is taken as is.
    pub fn move_cursor_down(&mut self) -> Result<(), BufferError> {
        let line_end = self.line_end(self.cursor);
        let after = line_end - self.cursor;
        let before = self.scan_back(self.cursor);

        let candidate = self.cursor + after + before;
        if candidate >= self.content.len() {
            return Err(BufferError::CannotMoveDown);
        }

        self.cursor = candidate;
        Ok(())
    }

    /// Offset just after the last terminator before `pos`, or 0
    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos]
            .iter()
            .rposition(|&b| b == NEWLINE)
            .map_or(0, |idx| idx + 1)
    }

    /// Offset of the first terminator at or after `pos`, or the buffer length
    fn line_end(&self, pos: usize) -> usize {
        self.content[pos..]
            .iter()
            .position(|&b| b == NEWLINE)
            .map_or(self.content.len(), |idx| pos + idx)
    }

    /// Bytes scanned backward from `pos` to reach a terminator (inclusive)
    /// or offset 0.
    fn scan_back(&self, pos: usize) -> usize {
        self.content[..pos]
            .iter()
            .rposition(|&b| b == NEWLINE)
            .map_or(pos, |idx| pos - idx)
    }
}
