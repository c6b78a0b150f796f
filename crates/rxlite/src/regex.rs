// Compiled pattern and the scan over a text

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use smol_str::SmolStr;

use crate::error::PatternResult;
use crate::matcher::MatchState;
use crate::option::MatchOption;
use crate::pattern::{Node, parse_pattern};

/// A compiled pattern. Immutable after construction and safe to share
/// between threads; every scan builds its own matching state.
#[derive(Debug, Clone)]
pub struct Regex {
    source: SmolStr,
    root: Node,
    // set when the whole pattern is a non-empty literal string
    literal: Option<SmolStr>,
    option: MatchOption,
}

/// A single match: byte offsets into the scanned text plus the matched slice.
/// Offsets always fall on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Match<'t> {
    pub start: usize,
    /// Exclusive
    pub end: usize,
    pub text: &'t str,
}

impl<'t> Match<'t> {
    #[inline]
    fn new(haystack: &'t str, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: &haystack[start..end],
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Byte offset of the char after the one at `pos`, or None at the end of text.
#[inline]
pub(crate) fn next_char(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

impl Regex {
    /// Compile `pattern` with the default `MatchOption`.
    pub fn new(pattern: &str) -> PatternResult<Self> {
        Self::with_option(pattern, MatchOption::default())
    }

    pub fn with_option(pattern: &str, option: MatchOption) -> PatternResult<Self> {
        let root = parse_pattern(pattern)?;
        log::debug!(
            "compiled pattern {:?} into {} nodes",
            pattern,
            root.node_count()
        );
        Ok(Self::from_parts(SmolStr::new(pattern), root, option))
    }

    /// Build from a hand-written tree. Every class range is checked; the
    /// source string is the tree's display form.
    pub fn from_ast(root: Node) -> PatternResult<Self> {
        root.validate()?;
        let source = SmolStr::new(root.to_string());
        Ok(Self::from_parts(source, root, MatchOption::default()))
    }

    pub(crate) fn from_parts(source: SmolStr, root: Node, option: MatchOption) -> Self {
        let literal = root
            .as_literal_string()
            .filter(|s| !s.is_empty())
            .map(SmolStr::new);
        Self {
            source,
            root,
            literal,
            option,
        }
    }

    /// The pattern this was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn ast(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn option(&self) -> &MatchOption {
        &self.option
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.search_from(text, 0).is_some()
    }

    /// First (leftmost) match in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    /// First match starting at or after byte offset `start`.
    /// `start` is clamped to the text and moved up to the next char boundary.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        let mut start = start.min(text.len());
        while !text.is_char_boundary(start) {
            start += 1;
        }
        self.search_from(text, start)
            .map(|(s, e)| Match::new(text, s, e))
    }

    /// Lazily scan `text` for all non-overlapping matches, left to right.
    /// Empty matches are reported too; dropping them is up to the caller.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        Matches {
            regex: self,
            text,
            pos: Some(0),
        }
    }

    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        self.find_iter(text).collect()
    }

    pub fn count(&self, text: &str) -> usize {
        self.find_iter(text).count()
    }

    /// Pieces of `text` between matches. A match at either edge yields an
    /// empty leading or trailing piece.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut pieces = Vec::new();
        let mut last = 0;
        for m in self.find_iter(text) {
            pieces.push(&text[last..m.start]);
            last = m.end;
        }
        pieces.push(&text[last..]);
        pieces
    }

    /// Leftmost match whose start is `>= pos`, as (start, end) byte offsets.
    pub(crate) fn search_from(&self, text: &str, pos: usize) -> Option<(usize, usize)> {
        if let Some(literal) = &self.literal {
            return text[pos..]
                .find(literal.as_str())
                .map(|i| (pos + i, pos + i + literal.len()));
        }

        let ms = MatchState::new(text, &self.option);
        let mut pos = pos;
        loop {
            if let Some(end) = ms.match_at(&self.root, pos) {
                return Some((pos, end));
            }
            pos = next_char(text, pos)?;
        }
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Regex {
    type Err = crate::error::PatternSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s)
    }
}

/// Lazy sequence of matches returned by `Regex::find_iter`.
/// Each `find_iter` call starts a fresh, independent scan.
pub struct Matches<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    // next offset to try; None once the text is exhausted
    pos: Option<usize>,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        let pos = self.pos?;
        let Some((start, end)) = self.regex.search_from(self.text, pos) else {
            self.pos = None;
            return None;
        };

        // Always move forward, by at least one char after an empty match
        self.pos = if end > start {
            Some(end)
        } else {
            next_char(self.text, start)
        };

        log::trace!("{}: match {}..{}", self.regex.source, start, end);
        Some(Match::new(self.text, start, end))
    }
}

impl FusedIterator for Matches<'_, '_> {}
