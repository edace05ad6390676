//! # QA Token Vocabulary

use crate::{
    errors::{SSResult, SamplerError},
    types::{QaHashMap, TokenType},
};

/// The unknown-token marker.
pub const UNK_TOKEN: &str = "<UNK>";

/// The sequence-start marker.
pub const START_TOKEN: &str = "<S>";

/// The sequence-end marker.
pub const END_TOKEN: &str = "</S>";

/// The reserved markers, in their conventional id order.
pub const RESERVED_TOKENS: [&str; 3] = [UNK_TOKEN, START_TOKEN, END_TOKEN];

/// Map of ``{ token string -> T }``.
pub type TokenMap<T> = QaHashMap<String, T>;

/// Token vocabulary for question-answering samplers.
///
/// Immutable once built; share it as `Arc<QaVocab<T>>`.
#[derive(Debug, Clone, PartialEq)]
pub struct QaVocab<T: TokenType> {
    token_map: TokenMap<T>,
    unk_token: T,
    start_token: T,
    end_token: T,
}

impl<T: TokenType> TryFrom<TokenMap<T>> for QaVocab<T> {
    type Error = SamplerError;

    fn try_from(token_map: TokenMap<T>) -> Result<Self, Self::Error> {
        Self::from_map(token_map)
    }
}

impl<T: TokenType> QaVocab<T> {
    /// Build a vocabulary from a token map.
    ///
    /// ## Errors
    /// [`SamplerError::MissingReservedToken`] if any of [`RESERVED_TOKENS`]
    /// is absent from the map.
    pub fn from_map(token_map: TokenMap<T>) -> SSResult<Self> {
        let reserved = |token: &str| {
            token_map
                .get(token)
                .copied()
                .ok_or_else(|| SamplerError::MissingReservedToken {
                    token: token.to_string(),
                })
        };

        let unk_token = reserved(UNK_TOKEN)?;
        let start_token = reserved(START_TOKEN)?;
        let end_token = reserved(END_TOKEN)?;

        Ok(Self {
            token_map,
            unk_token,
            start_token,
            end_token,
        })
    }

    /// Build a vocabulary from an ordered word list.
    ///
    /// The reserved markers take ids `0..3`; `words` follow in order,
    /// skipping any repeats.
    pub fn from_words<I, S>(words: I) -> SSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut token_map: TokenMap<T> = TokenMap::default();
        let words = RESERVED_TOKENS
            .iter()
            .map(|s| s.to_string())
            .chain(words.into_iter().map(|w| w.as_ref().to_string()));

        for word in words {
            if token_map.contains_key(&word) {
                continue;
            }
            let id = token_map.len();
            let token = T::from_usize(id).ok_or(SamplerError::TokenOutOfRange { id: id as u64 })?;
            token_map.insert(word, token);
        }

        Self::from_map(token_map)
    }

    /// Get the token map.
    pub fn token_map(&self) -> &TokenMap<T> {
        &self.token_map
    }

    /// The number of entries in the vocab.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    /// Is the vocab empty?
    ///
    /// Always `false` for a constructed vocab; the reserved entries exist.
    pub fn is_empty(&self) -> bool {
        self.token_map.is_empty()
    }

    /// The id of [`UNK_TOKEN`].
    pub fn unk_token(&self) -> T {
        self.unk_token
    }

    /// The id of [`START_TOKEN`].
    pub fn start_token(&self) -> T {
        self.start_token
    }

    /// The id of [`END_TOKEN`].
    pub fn end_token(&self) -> T {
        self.end_token
    }

    /// The largest id in the vocab.
    pub fn max_token(&self) -> Option<T> {
        self.token_map.values().max().copied()
    }

    /// Is the word in the vocab?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.token_map.contains_key(word)
    }

    /// Return the associated token for the word, if any.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<T> {
        self.token_map.get(word).copied()
    }

    /// Return the associated token for the word, or the unknown token.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> T {
        self.get(word).unwrap_or(self.unk_token)
    }

    /// Map tokens back to words, for inspection.
    ///
    /// Ids not in the vocab map to `None`. When several words share an id,
    /// which one is returned is unspecified.
    pub fn decode_tokens(
        &self,
        tokens: &[T],
    ) -> Vec<Option<&str>> {
        let reverse: QaHashMap<T, &str> = self
            .token_map
            .iter()
            .map(|(word, &token)| (token, word.as_str()))
            .collect();

        tokens
            .iter()
            .map(|token| reverse.get(token).copied())
            .collect()
    }

    /// Convert to a different token type.
    pub fn to_token_type<G: TokenType>(&self) -> SSResult<QaVocab<G>> {
        let token_map = self
            .token_map
            .iter()
            .map(|(word, &token)| {
                let id = token.to_u64().unwrap_or(u64::MAX);
                G::from_u64(id)
                    .map(|t| (word.clone(), t))
                    .ok_or(SamplerError::TokenOutOfRange { id })
            })
            .collect::<SSResult<TokenMap<G>>>()?;

        QaVocab::from_map(token_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> TokenMap<u32> {
        [(UNK_TOKEN, 0), (START_TOKEN, 1), (END_TOKEN, 2), ("cat", 3)]
            .into_iter()
            .map(|(w, t)| (w.to_string(), t))
            .collect()
    }

    #[test]
    fn test_reserved_tokens() {
        let vocab: QaVocab<u32> = sample_map().try_into().unwrap();
        assert_eq!(vocab.unk_token(), 0);
        assert_eq!(vocab.start_token(), 1);
        assert_eq!(vocab.end_token(), 2);
        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_token(), Some(3));
    }

    #[test]
    fn test_missing_reserved() {
        let mut map = sample_map();
        map.remove(START_TOKEN);

        let err = QaVocab::from_map(map).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::MissingReservedToken { ref token } if token == START_TOKEN
        ));
    }

    #[test]
    fn test_lookup() {
        let vocab = QaVocab::from_map(sample_map()).unwrap();
        assert_eq!(vocab.lookup_token("cat"), 3);
        assert_eq!(vocab.lookup_token("dog"), vocab.unk_token());
        assert_eq!(vocab.get("dog"), None);
        assert!(vocab.contains("cat"));

        assert_eq!(vocab.decode_tokens(&[3, 0, 99]), vec![
            Some("cat"),
            Some(UNK_TOKEN),
            None
        ]);
    }

    #[test]
    fn test_from_words() {
        let vocab: QaVocab<u16> = QaVocab::from_words(["the", "cat", "the", "<S>"]).unwrap();
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.get("the"), Some(3));
        assert_eq!(vocab.get("cat"), Some(4));
        assert_eq!(vocab.start_token(), 1);
    }

    #[test]
    fn test_to_token_type() {
        let vocab = QaVocab::from_map(sample_map()).unwrap();
        let small: QaVocab<u8> = vocab.to_token_type().unwrap();
        assert_eq!(small.get("cat"), Some(3u8));

        let mut big = sample_map();
        big.insert("huge".to_string(), 300);
        let big = QaVocab::from_map(big).unwrap();
        assert!(matches!(
            big.to_token_type::<u8>(),
            Err(SamplerError::TokenOutOfRange { id: 300 })
        ));
    }
}
