use core::ops::Range;
use std::sync::Arc;

use crate::{
    alignment::AnswerSpan,
    dataset::{SquadParagraph, SquadQuestion},
    tokenizer::TokenizedText,
    types::TokenType,
};

/// One question with its tokenized context and aligned answers.
///
/// Immutable once built; the sampler hands records out as `Arc<QaRecord<T>>`.
#[derive(Debug, Clone, PartialEq)]
pub struct QaRecord<T: TokenType> {
    pub(crate) question: Vec<T>,
    pub(crate) answers: Vec<Vec<T>>,
    pub(crate) answer_spans: Vec<AnswerSpan>,
    pub(crate) context: Arc<TokenizedText<T>>,
    pub(crate) paragraph: Arc<SquadParagraph>,
    pub(crate) question_index: usize,
}

impl<T: TokenType> QaRecord<T> {
    /// The question token ids.
    pub fn question(&self) -> &[T] {
        &self.question
    }

    /// The aligned answers' token ids, paired with [`Self::answer_spans`].
    pub fn answers(&self) -> &[Vec<T>] {
        &self.answers
    }

    /// The aligned, deduplicated answer spans over [`Self::context`].
    pub fn answer_spans(&self) -> &[AnswerSpan] {
        &self.answer_spans
    }

    /// The context token ids.
    pub fn context(&self) -> &[T] {
        &self.context.ids
    }

    /// The tokenized context: ids, char offsets, and byte spans.
    pub fn tokenized_context(&self) -> &Arc<TokenizedText<T>> {
        &self.context
    }

    /// The unique question id.
    pub fn id(&self) -> &str {
        &self.question_meta().id
    }

    /// The question type tag, if any.
    pub fn question_type(&self) -> Option<&str> {
        self.question_meta().question_type.as_deref()
    }

    /// The yes/no flag, if any.
    pub fn answer_is_yes(&self) -> Option<bool> {
        self.question_meta().answer_is_yes
    }

    /// The source paragraph record.
    pub fn paragraph_meta(&self) -> &Arc<SquadParagraph> {
        &self.paragraph
    }

    /// The source question record.
    pub fn question_meta(&self) -> &SquadQuestion {
        &self.paragraph.qas[self.question_index]
    }

    /// The context text.
    pub fn context_text(&self) -> &str {
        &self.paragraph.context
    }

    /// The character range of `span` in the context text.
    pub fn answer_char_range(
        &self,
        span: AnswerSpan,
    ) -> Option<Range<usize>> {
        self.context.char_range(self.context_text(), span.range())
    }

    /// The context text covered by `span`.
    pub fn answer_text(
        &self,
        span: AnswerSpan,
    ) -> Option<&str> {
        let bytes = self.context.byte_range(span.range())?;
        self.context_text().get(bytes)
    }
}
