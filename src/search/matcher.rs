//! Literal first-occurrence search over concatenated page text.

use crate::error::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Location of a match inside the concatenated page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchRange {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Length of the match in bytes
    pub length: usize,
}

impl MatchRange {
    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The match as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Finds the first occurrence of a fixed literal term.
///
/// Matching is exact and case-sensitive; characters that are special in
/// regular expressions match themselves. The term is compiled once and reused
/// for every page.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    term: String,
    // None for an empty term, which never matches
    regex: Option<Regex>,
}

impl SubstringMatcher {
    /// Build a matcher for `term`.
    ///
    /// An empty term is accepted and produces a matcher that never matches.
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();
        let regex = if term.is_empty() {
            None
        } else {
            let compiled = Regex::new(&regex::escape(&term)).map_err(|e| {
                Error::InvalidConfig(format!("Cannot build matcher for search term: {}", e))
            })?;
            Some(compiled)
        };
        Ok(Self { term, regex })
    }

    /// The search term this matcher looks for.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Leftmost occurrence of the term in `haystack`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::search::{MatchRange, SubstringMatcher};
    ///
    /// let matcher = SubstringMatcher::new("ligula").unwrap();
    /// assert_eq!(
    ///     matcher.find_first("foo ligula bar ligula"),
    ///     Some(MatchRange { start: 4, length: 6 })
    /// );
    /// assert_eq!(matcher.find_first("Ligula"), None);
    /// ```
    pub fn find_first(&self, haystack: &str) -> Option<MatchRange> {
        let regex = self.regex.as_ref()?;
        if self.term.len() > haystack.len() {
            return None;
        }
        regex.find(haystack).map(|m| MatchRange {
            start: m.start(),
            length: m.end() - m.start(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_leftmost_occurrence() {
        let matcher = SubstringMatcher::new("ab").unwrap();
        assert_eq!(matcher.find_first("xxabab"), Some(MatchRange { start: 2, length: 2 }));
    }

    #[test]
    fn test_overlapping_candidates_pick_smallest_start() {
        let matcher = SubstringMatcher::new("aa").unwrap();
        assert_eq!(matcher.find_first("baaa"), Some(MatchRange { start: 1, length: 2 }));
    }

    #[test]
    fn test_empty_term_never_matches() {
        let matcher = SubstringMatcher::new("").unwrap();
        assert_eq!(matcher.term(), "");
        assert_eq!(matcher.find_first(""), None);
        assert_eq!(matcher.find_first("anything"), None);
    }

    #[test]
    fn test_term_longer_than_text() {
        let matcher = SubstringMatcher::new("ligula").unwrap();
        assert_eq!(matcher.find_first("lig"), None);
        assert_eq!(matcher.find_first(""), None);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = SubstringMatcher::new("ligula").unwrap();
        assert_eq!(matcher.find_first("LIGULA Ligula"), None);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let matcher = SubstringMatcher::new("a.b").unwrap();
        assert_eq!(matcher.find_first("axb"), None);
        assert_eq!(matcher.find_first("axb a.b"), Some(MatchRange { start: 4, length: 3 }));

        let matcher = SubstringMatcher::new("(1+1)*").unwrap();
        assert_eq!(matcher.find_first("x(1+1)*y"), Some(MatchRange { start: 1, length: 6 }));
    }

    #[test]
    fn test_whole_text_match() {
        let matcher = SubstringMatcher::new("ligula").unwrap();
        let m = matcher.find_first("ligula").unwrap();
        assert_eq!(m.range(), 0..6);
        assert_eq!(m.end(), 6);
    }

    #[test]
    fn test_multibyte_offsets_are_bytes() {
        let matcher = SubstringMatcher::new("été").unwrap();
        let m = matcher.find_first("un été").unwrap();
        assert_eq!(m.start, 3);
        assert_eq!(m.length, "été".len());
    }

    #[test]
    fn test_deterministic() {
        let matcher = SubstringMatcher::new("na").unwrap();
        let text = "banana";
        assert_eq!(matcher.find_first(text), matcher.find_first(text));
    }
}
