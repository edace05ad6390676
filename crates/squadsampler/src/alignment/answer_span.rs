//! # Answer Spans

use core::ops::Range;

/// A half-open token interval ``[start, end)`` over a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct AnswerSpan {
    /// First token index.
    pub start: usize,

    /// One past the last token index.
    pub end: usize,
}

impl AnswerSpan {
    /// Create a new span.
    pub fn new(
        start: usize,
        end: usize,
    ) -> Self {
        Self { start, end }
    }

    /// The number of tokens covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Does the span cover no tokens?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The span as a token range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<(usize, usize)> for AnswerSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<AnswerSpan> for (usize, usize) {
    fn from(span: AnswerSpan) -> Self {
        (span.start, span.end)
    }
}

impl From<AnswerSpan> for Range<usize> {
    fn from(span: AnswerSpan) -> Self {
        span.range()
    }
}
