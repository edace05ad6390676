//! # Offset Tokenizer

use std::sync::Arc;

use crate::{
    spanning::WordSpanner,
    tokenizer::TokenizedText,
    types::TokenType,
    vocab::QaVocab,
};

/// Tokenizer which records the character offset of every token.
///
/// Tokens are the words of a [`WordSpanner`] (by default,
/// word-or-single-punctuation). Ids are looked up in the vocabulary when
/// one is attached, falling back to its unknown token.
#[derive(Debug, Clone)]
pub struct OffsetTokenizer<T: TokenType> {
    spanner: WordSpanner,
    vocab: Option<Arc<QaVocab<T>>>,
}

impl<T: TokenType> Default for OffsetTokenizer<T> {
    fn default() -> Self {
        Self::without_vocab()
    }
}

impl<T: TokenType> OffsetTokenizer<T> {
    /// Create a tokenizer which looks ids up in `vocab`.
    pub fn new(vocab: Arc<QaVocab<T>>) -> Self {
        Self {
            spanner: WordSpanner::default(),
            vocab: Some(vocab),
        }
    }

    /// Create a tokenizer which only computes offsets.
    pub fn without_vocab() -> Self {
        Self {
            spanner: WordSpanner::default(),
            vocab: None,
        }
    }

    /// Replace the word spanner.
    pub fn with_spanner(
        mut self,
        spanner: WordSpanner,
    ) -> Self {
        self.spanner = spanner;
        self
    }

    /// Get the word spanner.
    pub fn spanner(&self) -> &WordSpanner {
        &self.spanner
    }

    /// Get the vocabulary, if any.
    pub fn vocab(&self) -> Option<&Arc<QaVocab<T>>> {
        self.vocab.as_ref()
    }

    /// Tokenize `text`.
    ///
    /// Each token is located by scanning forward from the end of the
    /// previous one; the scan never moves backward, so a token whose text
    /// also appears earlier is bound to its own occurrence.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> TokenizedText<T> {
        let mut result = TokenizedText::default();

        // (byte, char) position of the last token start.
        let mut byte_pos = 0;
        let mut char_pos = 0;

        self.spanner.for_each_word(text, |range| {
            char_pos += text[byte_pos..range.start].chars().count();
            byte_pos = range.start;

            if let Some(vocab) = &self.vocab {
                result.ids.push(vocab.lookup_token(&text[range.clone()]));
            }
            result.offsets.push(char_pos);
            result.spans.push(range);
        });

        result
    }

    /// Tokenize `text`, returning only the ids.
    ///
    /// Empty when no vocabulary is attached.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.tokenize(text).ids
    }

    /// Compute only the character offsets of the tokens in `text`.
    pub fn char_offsets(
        &self,
        text: &str,
    ) -> Vec<usize> {
        self.tokenize(text).offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::QaVocab;

    fn vocab() -> Arc<QaVocab<u32>> {
        // <UNK>=0 <S>=1 </S>=2 The=3 cat=4 sat=5 .=6
        Arc::new(QaVocab::from_words(["The", "cat", "sat", "."]).unwrap())
    }

    #[test]
    fn test_tokenize_cat_sat() {
        let tokenizer = OffsetTokenizer::new(vocab());
        let text = "The cat sat.";

        let tt = tokenizer.tokenize(text);
        assert_eq!(tt.ids, vec![3, 4, 5, 6]);
        assert_eq!(tt.offsets, vec![0, 4, 8, 11]);
        assert_eq!(tt.spans, vec![0..3, 4..7, 8..11, 11..12]);
    }

    #[test]
    fn test_unknown_words() {
        let tokenizer = OffsetTokenizer::new(vocab());
        assert_eq!(tokenizer.encode("The dog sat!"), vec![3, 0, 5, 0]);
    }

    #[test]
    fn test_without_vocab() {
        let tokenizer: OffsetTokenizer<u32> = OffsetTokenizer::without_vocab();
        let tt = tokenizer.tokenize("a  b\n\tc");
        assert!(tt.ids.is_empty());
        assert_eq!(tt.offsets, vec![0, 3, 6]);
        assert_eq!(tokenizer.char_offsets("x,y"), vec![0, 1, 2]);
        assert!(tokenizer.encode("x,y").is_empty());
    }

    #[test]
    fn test_repeated_words() {
        let tokenizer: OffsetTokenizer<u32> = OffsetTokenizer::default();
        // the second "cat" must not bind to the first occurrence.
        assert_eq!(tokenizer.char_offsets("cat cat  cat"), vec![0, 4, 9]);
    }

    #[test]
    fn test_char_offsets_not_bytes() {
        let tokenizer: OffsetTokenizer<u32> = OffsetTokenizer::default();
        let text = "Zürich—Genève ok";
        let tt = tokenizer.tokenize(text);

        assert_eq!(tt.offsets, vec![0, 6, 7, 14]);
        assert_eq!(tt.token_str(text, 2), Some("Genève"));
    }

    #[test]
    fn test_decomposed_accent_offsets() {
        let tokenizer: OffsetTokenizer<u32> = OffsetTokenizer::default();
        let text = "cafe\u{301} m² ok";
        let tt = tokenizer.tokenize(text);

        // the combining acute is its own token, one char wide.
        assert_eq!(tt.offsets, vec![0, 4, 6, 9]);
        assert_eq!(tt.token_str(text, 1), Some("\u{301}"));
        assert_eq!(tt.token_str(text, 2), Some("m²"));
    }

    #[test]
    fn test_custom_spanner() {
        let tokenizer: OffsetTokenizer<u32> = OffsetTokenizer::default()
            .with_spanner(WordSpanner::from_pattern(r"\S+").unwrap());
        assert_eq!(tokenizer.char_offsets("a.b  c"), vec![0, 5]);
        assert!(tokenizer.vocab().is_none());
    }
}
