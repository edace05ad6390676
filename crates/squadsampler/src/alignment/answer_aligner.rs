//! # Answer Aligner

use core::ops::AddAssign;

use crate::{alignment::AnswerSpan, types::TokenType};

/// Locate the token span of an answer in a context.
///
/// ## Arguments
/// * `context_offsets` - the strictly increasing char offsets of the context tokens.
/// * `char_start` - the answer's character start.
/// * `answer_len` - the answer's length in tokens.
///
/// ## Returns
/// `None` when `char_start` is not the start of any context token.
pub fn locate_answer(
    context_offsets: &[usize],
    char_start: usize,
    answer_len: usize,
) -> Option<AnswerSpan> {
    let start = context_offsets.binary_search(&char_start).ok()?;
    Some(AnswerSpan::new(start, start + answer_len))
}

/// The result of aligning one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOutcome {
    /// The answer was recorded at this span.
    Aligned(AnswerSpan),

    /// The span was already recorded for this question; skipped.
    Duplicate(AnswerSpan),

    /// The start does not fall on a token boundary; skipped.
    Unaligned,
}

/// Counts of [`AlignOutcome`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct AlignmentStats {
    /// Answers recorded.
    pub aligned: usize,

    /// Answers skipped as duplicate spans.
    pub duplicate: usize,

    /// Answers skipped for not starting on a token boundary.
    pub unaligned: usize,
}

impl AlignmentStats {
    /// Count one outcome.
    pub fn record(
        &mut self,
        outcome: AlignOutcome,
    ) {
        match outcome {
            AlignOutcome::Aligned(_) => self.aligned += 1,
            AlignOutcome::Duplicate(_) => self.duplicate += 1,
            AlignOutcome::Unaligned => self.unaligned += 1,
        }
    }

    /// Total answers seen.
    pub fn total(&self) -> usize {
        self.aligned + self.duplicate + self.unaligned
    }

    /// Answers skipped for any reason.
    pub fn skipped(&self) -> usize {
        self.duplicate + self.unaligned
    }
}

impl AddAssign for AlignmentStats {
    fn add_assign(
        &mut self,
        rhs: Self,
    ) {
        self.aligned += rhs.aligned;
        self.duplicate += rhs.duplicate;
        self.unaligned += rhs.unaligned;
    }
}

/// Per-question accumulator of aligned answers.
///
/// `answers` and `spans` stay paired by index: the `i`-th answer's token
/// ids cover the `i`-th span of the context.
#[derive(Debug, Clone)]
pub struct AnswerAligner<'a, T: TokenType> {
    context_offsets: &'a [usize],
    answers: Vec<Vec<T>>,
    spans: Vec<AnswerSpan>,
    stats: AlignmentStats,
}

impl<'a, T: TokenType> AnswerAligner<'a, T> {
    /// Create an aligner over one context's char offsets.
    pub fn new(context_offsets: &'a [usize]) -> Self {
        Self {
            context_offsets,
            answers: Vec::new(),
            spans: Vec::new(),
            stats: AlignmentStats::default(),
        }
    }

    /// Align one answer.
    ///
    /// ## Arguments
    /// * `char_start` - the answer's character start in the context;
    ///   negative starts never align.
    /// * `answer_len` - the answer's length in tokens.
    /// * `answer_ids` - the answer's token ids; recorded only on success.
    pub fn align(
        &mut self,
        char_start: i64,
        answer_len: usize,
        answer_ids: Vec<T>,
    ) -> AlignOutcome {
        let span = usize::try_from(char_start)
            .ok()
            .and_then(|start| locate_answer(self.context_offsets, start, answer_len));

        let outcome = match span {
            None => AlignOutcome::Unaligned,
            Some(span) if self.spans.contains(&span) => AlignOutcome::Duplicate(span),
            Some(span) => {
                self.spans.push(span);
                self.answers.push(answer_ids);
                AlignOutcome::Aligned(span)
            }
        };
        self.stats.record(outcome);
        outcome
    }

    /// The spans recorded so far.
    pub fn spans(&self) -> &[AnswerSpan] {
        &self.spans
    }

    /// The outcome counts so far.
    pub fn stats(&self) -> AlignmentStats {
        self.stats
    }

    /// Release the paired ``(answers, spans)``.
    pub fn finish(self) -> (Vec<Vec<T>>, Vec<AnswerSpan>) {
        (self.answers, self.spans)
    }
}
