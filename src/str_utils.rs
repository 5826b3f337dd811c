//! Quote-aware searching and splitting of SQL text
use serde::Deserialize;

/// Characters that each open and close their own quoted region
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct QuoteSet(Vec<char>);

impl QuoteSet {
    /// Build a set from the given characters, dropping duplicates
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = Vec::new();
        for ch in chars {
            if !set.contains(&ch) {
                set.push(ch);
            }
        }
        QuoteSet(set)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Check whether any quote character appears in `text`
    pub fn any_in(&self, text: &str) -> bool {
        text.chars().any(|ch| self.contains(ch))
    }
}

impl Default for QuoteSet {
    fn default() -> Self {
        QuoteSet::new(['\'', '"'])
    }
}

impl From<&str> for QuoteSet {
    fn from(chars: &str) -> Self {
        QuoteSet::new(chars.chars())
    }
}

impl From<String> for QuoteSet {
    fn from(chars: String) -> Self {
        QuoteSet::from(chars.as_str())
    }
}

/// Scanner state. Only one quote kind is active at a time: the one that opened the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Unquoted,
    QuotedBy(char),
}

impl QuoteState {
    /// Advance the state over one character (no backslash escaping)
    pub fn step(self, ch: char, quotes: &QuoteSet) -> Self {
        match self {
            QuoteState::Unquoted if quotes.contains(ch) => QuoteState::QuotedBy(ch),
            QuoteState::QuotedBy(open) if open == ch => QuoteState::Unquoted,
            state => state,
        }
    }

    pub fn is_quoted(self) -> bool {
        matches!(self, QuoteState::QuotedBy(_))
    }
}

/// Iterator over byte offsets of non-overlapping occurrences of a needle outside quoted regions
#[derive(Debug, Clone)]
pub struct UnquotedMatches<'a> {
    haystack: &'a str,
    needle: &'a str,
    quotes: &'a QuoteSet,
    case_insensitive: bool,
    pos: usize,
    state: QuoteState,
}

impl UnquotedMatches<'_> {
    fn matches_at(&self, at: usize) -> bool {
        let needle = self.needle.as_bytes();
        match self.haystack.as_bytes().get(at..at + needle.len()) {
            Some(candidate) if self.case_insensitive => candidate.eq_ignore_ascii_case(needle),
            Some(candidate) => candidate == needle,
            None => false,
        }
    }
}

impl Iterator for UnquotedMatches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.needle.is_empty() {
            return None;
        }

        while let Some(ch) = self.haystack.get(self.pos..).and_then(|rest| rest.chars().next()) {
            let at = self.pos;
            if !self.state.is_quoted() && self.matches_at(at) {
                self.pos = at + self.needle.len();
                return Some(at);
            }
            self.state = self.state.step(ch, self.quotes);
            self.pos = at + ch.len_utf8();
        }

        None
    }
}

/// Scan `haystack` from byte offset `from` (fresh quote state) for unquoted occurrences of `needle`.
/// Case folding applies to ASCII letters of the needle comparison only, never to quote detection.
/// An unterminated quote keeps the rest of the input quoted.
pub fn unquoted_matches<'a>(
    haystack: &'a str,
    needle: &'a str,
    from: usize,
    quotes: &'a QuoteSet,
    case_insensitive: bool,
) -> UnquotedMatches<'a> {
    UnquotedMatches {
        haystack,
        needle,
        quotes,
        case_insensitive,
        pos: from,
        state: QuoteState::Unquoted,
    }
}

/// Find the first unquoted occurrence of `needle` at or after `from`
pub fn find_unquoted(
    haystack: &str,
    needle: &str,
    from: usize,
    quotes: &QuoteSet,
    case_insensitive: bool,
) -> Option<usize> {
    unquoted_matches(haystack, needle, from, quotes, case_insensitive).next()
}

/// Split on every unquoted occurrence of `delimiter`, keeping the pieces verbatim (untrimmed)
pub fn split_unquoted<'a>(haystack: &'a str, delimiter: &str, quotes: &QuoteSet) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for at in unquoted_matches(haystack, delimiter, 0, quotes, false) {
        parts.push(&haystack[start..at]);
        start = at + delimiter.len();
    }
    parts.push(&haystack[start..]);

    parts
}
