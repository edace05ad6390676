//! # Word Spanner

use core::ops::Range;

use crate::{
    errors::SSResult,
    regex::{RegexPattern, RegexWrapper, WORD_OR_PUNCT_PATTERN},
};

/// Span Label/Range Reference for [`WordSpanner`].
///
/// Ranges are byte ranges into the spanned text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A word (token) reference.
    Word(Range<usize>),

    /// A gap reference.
    Gap(Range<usize>),
}

impl SpanRef {
    /// Is this a [`SpanRef::Word`]?
    pub fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

/// Regex-based word spanner.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpanner {
    /// Regex for splitting words.
    word_re: RegexWrapper,
}

impl Default for WordSpanner {
    fn default() -> Self {
        Self::word_or_punct()
    }
}

impl From<RegexWrapper> for WordSpanner {
    fn from(word_re: RegexWrapper) -> Self {
        Self::new(word_re)
    }
}

impl WordSpanner {
    /// Build a new [`WordSpanner`] from a compiled regex.
    pub fn new(word_re: RegexWrapper) -> Self {
        Self { word_re }
    }

    /// Build a new [`WordSpanner`] from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word split pattern.
    pub fn from_pattern<P>(pattern: P) -> SSResult<Self>
    where
        P: Into<RegexPattern>,
    {
        Ok(Self::new(pattern.into().compile()?))
    }

    /// The word-or-single-punctuation spanner.
    pub fn word_or_punct() -> Self {
        match WORD_OR_PUNCT_PATTERN.compile() {
            Ok(re) => Self::new(re),
            Err(err) => unreachable!("constant pattern failed to compile: {err}"),
        }
    }

    /// Get the word split regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        &self.word_re
    }

    /// Iterate over all split [`SpanRef`]s in the text.
    ///
    /// # Arguments
    /// * `text` - the text to split.
    /// * `f` - the function to apply to each span;
    ///   halts when the function returns `false`.
    ///
    /// Note: a byte is consumed *only if* the function returns `true`.
    ///
    /// # Returns
    /// ``(completed, consumed)`` where:
    /// - `consumed` is the number of bytes covered by spans accepted by `f`;
    /// - `completed` is if all spans were accepted.
    pub fn for_each_split_span<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> (bool, usize)
    where
        F: FnMut(SpanRef) -> bool,
    {
        let mut last = 0;
        for range in self.word_re.find_ranges(text) {
            let Range { start, end } = range;

            // Zero-width matches carry no token text.
            if start == end {
                continue;
            }

            if last < start {
                if !f(SpanRef::Gap(last..start)) {
                    // Leading Gap Exit
                    return (false, last);
                }
                last = start;
            }

            if !f(SpanRef::Word(range)) {
                // Word Exit
                return (false, last);
            }
            last = end;
        }

        if last < text.len() {
            if !f(SpanRef::Gap(last..text.len())) {
                // Trailing Gap Exit
                return (false, last);
            }
            last = text.len();
        }

        (true, last)
    }

    /// Iterate over the byte ranges of the words in the text.
    pub fn for_each_word<F>(
        &self,
        text: &str,
        mut f: F,
    ) where
        F: FnMut(Range<usize>),
    {
        self.for_each_split_span(text, &mut |span| {
            if let SpanRef::Word(range) = span {
                f(range);
            }
            true
        });
    }

    /// Split text into spans.
    pub fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        let mut spans = Vec::new();
        self.for_each_split_span(text, &mut |span_ref| {
            spans.push(span_ref);
            true
        });
        spans
    }

    /// Split text into word slices, dropping gaps.
    pub fn split_words<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut words = Vec::new();
        self.for_each_word(text, |range| words.push(&text[range]));
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_spans() {
        use SpanRef::*;

        let spanner = WordSpanner::default();
        let source = "The cat  sat.\tOK ";

        assert_eq!(spanner.split_spans(source), vec![
            Word(0..3),
            Gap(3..4),
            Word(4..7),
            Gap(7..9),
            Word(9..12),
            Word(12..13),
            Gap(13..14),
            Word(14..16),
            Gap(16..17),
        ]);
    }

    #[test]
    fn test_split_words() {
        let spanner = WordSpanner::word_or_punct();

        assert_eq!(spanner.split_words("don't stop_now!!"), vec![
            "don", "'", "t", "stop_now", "!", "!"
        ]);
        assert_eq!(spanner.split_words("  \n\t "), Vec::<&str>::new());
        assert_eq!(spanner.split_words("café 42€"), vec!["café", "42", "€"]);
    }

    #[test]
    fn test_word_class() {
        let spanner = WordSpanner::word_or_punct();

        // other-number digits are word characters.
        assert_eq!(spanner.split_words("10 m² area"), vec!["10", "m²", "area"]);
        assert_eq!(spanner.split_words("Ca²⁺ ions"), vec!["Ca²", "⁺", "ions"]);

        // combining marks and non-underscore connectors are not.
        assert_eq!(spanner.split_words("cafe\u{301} ok"), vec![
            "cafe", "\u{301}", "ok"
        ]);
        assert_eq!(spanner.split_words("x\u{203f}y"), vec!["x", "\u{203f}", "y"]);
        assert_eq!(spanner.split_words("snake_case"), vec!["snake_case"]);
    }

    #[test]
    fn test_halting() {
        use SpanRef::*;

        let spanner = WordSpanner::default();

        // Leading Gap Exit
        let mut spans = Vec::new();
        let (done, used) = spanner.for_each_split_span("abc  def", &mut |span| match span {
            Gap(_) => false,
            _ => {
                spans.push(span);
                true
            }
        });
        assert!(!done);
        assert_eq!(used, 3);
        assert_eq!(spans, vec![Word(0..3)]);

        // Word Exit
        let (done, used) = spanner.for_each_split_span("   abc", &mut |span| !span.is_word());
        assert!(!done);
        assert_eq!(used, 3);

        // Trailing Gap Exit
        let (done, used) = spanner.for_each_split_span("foo  ", &mut |span| span.is_word());
        assert!(!done);
        assert_eq!(used, 3);

        let (done, used) = spanner.for_each_split_span("foo  ", &mut |_| true);
        assert!(done);
        assert_eq!(used, 5);
    }

    #[test]
    fn test_custom_pattern() {
        let spanner = WordSpanner::from_pattern(r"\S+").unwrap();
        assert_eq!(spanner.split_words("a.b c"), vec!["a.b", "c"]);

        assert!(WordSpanner::from_pattern(r"(").is_err());
    }
}
