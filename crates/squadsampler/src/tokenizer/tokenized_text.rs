//! # Tokenized Text

use core::ops::Range;

use crate::types::TokenType;

/// Token ids and offsets for one tokenized string.
///
/// `offsets` and `spans` always have one entry per token, in text order;
/// `ids` is parallel to them when a vocabulary was used, and empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedText<T: TokenType> {
    /// Token ids.
    pub ids: Vec<T>,

    /// Character offset of each token's first character.
    pub offsets: Vec<usize>,

    /// Byte range of each token.
    pub spans: Vec<Range<usize>>,
}

impl<T: TokenType> TokenizedText<T> {
    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Are there no tokens?
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Were ids looked up for this text?
    pub fn has_ids(&self) -> bool {
        self.ids.len() == self.offsets.len() && !self.is_empty()
    }

    /// Find the token which starts exactly at `char_offset`.
    ///
    /// Offsets are strictly increasing, so this is a binary search.
    pub fn token_at_offset(
        &self,
        char_offset: usize,
    ) -> Option<usize> {
        self.offsets.binary_search(&char_offset).ok()
    }

    /// Slice the `index`-th token out of the text it was built from.
    pub fn token_str<'a>(
        &self,
        text: &'a str,
        index: usize,
    ) -> Option<&'a str> {
        self.spans.get(index).and_then(|r| text.get(r.clone()))
    }

    /// The byte range covering the half-open token range `tokens`.
    ///
    /// Returns `None` for an empty or out-of-bounds range.
    pub fn byte_range(
        &self,
        tokens: Range<usize>,
    ) -> Option<Range<usize>> {
        if tokens.start >= tokens.end || tokens.end > self.len() {
            return None;
        }
        Some(self.spans[tokens.start].start..self.spans[tokens.end - 1].end)
    }

    /// The character range covering the half-open token range `tokens`.
    ///
    /// `text` must be the string this was built from.
    pub fn char_range(
        &self,
        text: &str,
        tokens: Range<usize>,
    ) -> Option<Range<usize>> {
        let start = *self.offsets.get(tokens.start)?;
        let bytes = self.byte_range(tokens)?;
        let width = text.get(bytes)?.chars().count();
        Some(start..start + width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_sat() -> TokenizedText<u32> {
        TokenizedText {
            ids: vec![5, 6, 7, 8],
            offsets: vec![0, 4, 8, 11],
            spans: vec![0..3, 4..7, 8..11, 11..12],
        }
    }

    #[test]
    fn test_token_at_offset() {
        let tt = cat_sat();
        assert_eq!(tt.len(), 4);
        assert!(tt.has_ids());
        assert_eq!(tt.token_at_offset(4), Some(1));
        assert_eq!(tt.token_at_offset(11), Some(3));
        assert_eq!(tt.token_at_offset(5), None);
    }

    #[test]
    fn test_ranges() {
        let text = "The cat sat.";
        let tt = cat_sat();

        assert_eq!(tt.token_str(text, 2), Some("sat"));
        assert_eq!(tt.token_str(text, 9), None);

        assert_eq!(tt.byte_range(1..3), Some(4..11));
        assert_eq!(tt.byte_range(2..2), None);
        assert_eq!(tt.byte_range(3..5), None);

        assert_eq!(tt.char_range(text, 1..4), Some(4..12));
    }

    #[test]
    fn test_char_range_multibyte() {
        // "é" is two bytes but one character.
        let text = "né là";
        let tt: TokenizedText<u32> = TokenizedText {
            ids: vec![],
            offsets: vec![0, 3],
            spans: vec![0..3, 4..7],
        };
        assert!(!tt.has_ids());
        assert_eq!(tt.char_range(text, 1..2), Some(3..5));
        assert_eq!(tt.char_range(text, 0..2), Some(0..5));
    }
}
