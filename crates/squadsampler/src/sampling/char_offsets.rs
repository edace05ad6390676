use std::sync::Arc;

use crate::{
    tokenizer::TokenizedText,
    types::{QaHashMap, TokenType},
};

/// Map from question id to its context's token char offsets.
///
/// Contexts are shared between the questions of a paragraph.
#[derive(Debug, Clone, Default)]
pub struct CharOffsetIndex<T: TokenType> {
    contexts: QaHashMap<String, Arc<TokenizedText<T>>>,
}

impl<T: TokenType> CharOffsetIndex<T> {
    /// Record the context of question `id`, replacing any earlier entry.
    pub fn insert(
        &mut self,
        id: String,
        context: Arc<TokenizedText<T>>,
    ) {
        self.contexts.insert(id, context);
    }

    /// The char offsets of the context of question `id`.
    pub fn get(
        &self,
        id: &str,
    ) -> Option<&[usize]> {
        self.contexts.get(id).map(|c| c.offsets.as_slice())
    }

    /// The full tokenized context of question `id`.
    pub fn context(
        &self,
        id: &str,
    ) -> Option<&Arc<TokenizedText<T>>> {
        self.contexts.get(id)
    }

    /// Is question `id` indexed?
    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.contexts.contains_key(id)
    }

    /// The number of indexed questions.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Is the index empty?
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Iterate over ``(question id, char offsets)``.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.contexts
            .iter()
            .map(|(id, c)| (id.as_str(), c.offsets.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        let context: Arc<TokenizedText<u32>> = Arc::new(TokenizedText {
            ids: vec![],
            offsets: vec![0, 4],
            spans: vec![0..3, 4..7],
        });

        let mut index = CharOffsetIndex::default();
        assert!(index.is_empty());

        index.insert("q1".to_string(), context.clone());
        index.insert("q2".to_string(), context.clone());

        assert_eq!(index.len(), 2);
        assert!(index.contains("q1"));
        assert_eq!(index.get("q2"), Some(&[0, 4][..]));
        assert_eq!(index.get("q3"), None);
        assert!(Arc::ptr_eq(index.context("q1").unwrap(), &context));
        assert_eq!(index.iter().count(), 2);
    }
}
