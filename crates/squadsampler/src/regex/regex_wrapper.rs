//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::{fmt::Debug, ops::Range};

use crate::regex::RegexPattern;

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<::regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<::regex::Error> for ErrorWrapper {
    fn from(err: ::regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

impl TryFrom<RegexPattern> for RegexWrapper {
    type Error = ErrorWrapper;

    fn try_from(pattern: RegexPattern) -> Result<Self, Self::Error> {
        pattern.compile()
    }
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(::regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<::regex::Regex> for RegexWrapper {
    fn from(regex: ::regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Iterate over the byte ranges of non-overlapping matches, left to right.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// A `fancy_regex` runtime error (backtrack limit) ends the iteration.
    pub fn find_ranges<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchRanges<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchRanges::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchRanges::Fancy(regex.find_iter(haystack)),
        }
    }
}

/// Iterator over match byte ranges; see [`RegexWrapper::find_ranges`].
pub enum MatchRanges<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Basic(::regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    Fancy(fancy_regex::Matches<'r, 'h>),
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| m.range()),
            Self::Fancy(matches) => match matches.next()? {
                Ok(m) => Some(m.range()),
                Err(err) => {
                    log::warn!("fancy regex match failed: {err}");
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_eq() {
        let b0 = RegexPattern::Basic("hello world".to_string())
            .compile()
            .unwrap();
        let b1 = RegexPattern::Basic("world".to_string()).compile().unwrap();
        let f0 = RegexPattern::Fancy("hello world".to_string())
            .compile()
            .unwrap();

        assert_eq!(&b0, &b0);
        assert_ne!(&b0, &b1);
        assert_ne!(&b0, &f0);
    }

    #[test]
    fn test_find_ranges() {
        let text = "ab, cd";

        let basic: RegexWrapper = RegexPattern::Basic(r"\w+".to_string())
            .try_into()
            .unwrap();
        assert_eq!(basic.find_ranges(text).collect::<Vec<_>>(), vec![
            0..2,
            4..6
        ]);

        let fancy: RegexWrapper = RegexPattern::Fancy(r"\w+(?=,)|\w+$".to_string())
            .try_into()
            .unwrap();
        assert_eq!(fancy.find_ranges(text).collect::<Vec<_>>(), vec![
            0..2,
            4..6
        ]);
    }
}
