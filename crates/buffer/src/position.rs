use std::cmp::Ordering;

/// Cursor location expressed as line and column.
///
/// Both fields are 0-based. `column` counts bytes from the start of the
/// line, so a multi-byte character occupies several columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LinePosition {
    /// Number of `\n` bytes before the cursor
    pub line: usize,
    /// Byte distance from the start of the line
    pub column: usize,
}

impl LinePosition {
    /// Create position at specified line and column
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for LinePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LinePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.line.cmp(&other.line) {
            Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}
