//! # Vocabulary Builder

use crate::{
    dataset::SquadDataset,
    errors::SSResult,
    spanning::WordSpanner,
    types::{QaHashMap, TokenType},
    vocab::{QaVocab, RESERVED_TOKENS},
};

/// Counts word frequencies and builds a [`QaVocab`] from them.
///
/// Words are split with the same [`WordSpanner`] the sampler tokenizes with,
/// so every counted word is a token the sampler can look up.
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    /// The word spanner.
    spanner: WordSpanner,

    /// The word counts.
    word_counts: QaHashMap<String, usize>,
}

impl Default for VocabBuilder {
    fn default() -> Self {
        Self::new(WordSpanner::default())
    }
}

impl VocabBuilder {
    /// Create a new builder.
    pub fn new(spanner: WordSpanner) -> Self {
        Self {
            spanner,
            word_counts: QaHashMap::default(),
        }
    }

    /// The word counts so far.
    pub fn word_counts(&self) -> &QaHashMap<String, usize> {
        &self.word_counts
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let text = text.as_ref();
        let word_counts = &mut self.word_counts;
        self.spanner.for_each_word(text, |range| {
            *word_counts.entry(text[range].to_string()).or_default() += 1;
        });
    }

    /// Update word counts from every context, question, and answer text.
    pub fn update_from_dataset(
        &mut self,
        dataset: &SquadDataset,
    ) {
        for paragraph in dataset.paragraphs() {
            self.update_from_text(&paragraph.context);
            for qa in &paragraph.qas {
                self.update_from_text(&qa.question);
                for answer in &qa.answers {
                    self.update_from_text(&answer.text);
                }
            }
        }
    }

    /// Build the vocabulary.
    ///
    /// Reserved markers take ids `0..3`. Words seen at least `min_count`
    /// times follow, most frequent first, ties broken lexicographically.
    /// `max_size`, if set, caps the total size (reserved markers included).
    pub fn build<T: TokenType>(
        &self,
        min_count: usize,
        max_size: Option<usize>,
    ) -> SSResult<QaVocab<T>> {
        let mut words: Vec<(&String, usize)> = self
            .word_counts
            .iter()
            .filter(|(word, count)| {
                **count >= min_count && !RESERVED_TOKENS.contains(&word.as_str())
            })
            .map(|(word, count)| (word, *count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        if let Some(max_size) = max_size {
            words.truncate(max_size.saturating_sub(RESERVED_TOKENS.len()));
        }

        log::info!(
            "built vocab: {} words kept of {} counted (min_count={min_count})",
            words.len(),
            self.word_counts.len()
        );

        QaVocab::from_words(words.into_iter().map(|(word, _)| word))
    }
}
