use std::ops::Range;

/// A byte range `[start, end)` into a single line.
///
/// Spans locate delimiter matches and protected regions. They always refer to
/// the line text that was scanned to produce them, never to a rewritten line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if the two spans overlap or touch.
    ///
    /// The end offsets are compared inclusively, so `[0, 2)` and `[2, 4)`
    /// intersect. A delimiter sitting directly against a link target or code
    /// span is treated as part of it.
    #[must_use]
    pub fn intersects(self, other: Span) -> bool {
        self.end >= other.start && other.end >= self.start
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}
