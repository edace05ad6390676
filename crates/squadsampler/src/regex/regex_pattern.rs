//! # Regex Patterns

use crate::regex::{ErrorWrapper, RegexWrapper};

/// The word-or-single-punctuation pattern.
///
/// Maximal runs of word characters, or single characters which are
/// neither word nor whitespace. Word characters are letters (`\p{L}`),
/// numbers of any kind (`\p{N}`, so `²` joins `m²`), and underscore;
/// combining marks and other connector punctuation stand alone.
/// Whitespace is never matched.
pub const WORD_OR_PUNCT_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"[\p{L}\p{N}_]+|[^\p{L}\p{N}_\s]");

/// Const Regex Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(&'static str),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Convert to [`RegexPattern`]
    pub fn to_pattern(self) -> RegexPattern {
        self.into()
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        RegexPattern::from(*self).compile()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        match pattern {
            ConstRegexPattern::Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            ConstRegexPattern::Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
        }
    }
}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => ::regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => ::regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(ErrorWrapper::from)
                }),
        }
    }
}
