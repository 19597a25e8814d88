/// A range of source lines `[start, end)`, zero-based.
///
/// Every block records the lines it consumed so callers (and the invariant
/// checks) can map output back to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineSpan {
    /// Inclusive first line index.
    pub start: usize,
    /// Exclusive end line index.
    pub end: usize,
}

impl LineSpan {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span covering exactly one line.
    #[must_use]
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line + 1,
        }
    }

    /// Returns the number of lines. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
