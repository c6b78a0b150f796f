// Character class membership
// Handles [set] / [^set] and the shorthand classes \d, \w, \s (and \D, \W, \S)

use crate::error::{PatternResult, PatternSyntaxError, SyntaxErrorKind};

/// Shorthand class letter: `\d`, `\w`, `\s`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shorthand {
    Digit, // \d
    Word,  // \w
    Space, // \s
}

impl Shorthand {
    /// Map an escape letter to its class. Uppercase letters are the inverted form,
    /// reported through the second tuple field.
    pub fn from_escape(c: char) -> Option<(Shorthand, bool)> {
        match c {
            'd' => Some((Shorthand::Digit, false)),
            'w' => Some((Shorthand::Word, false)),
            's' => Some((Shorthand::Space, false)),
            'D' => Some((Shorthand::Digit, true)),
            'W' => Some((Shorthand::Word, true)),
            'S' => Some((Shorthand::Space, true)),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn matches(&self, c: char) -> bool {
        match self {
            Shorthand::Digit => c.is_ascii_digit(),
            Shorthand::Word => c.is_alphanumeric() || c == '_',
            Shorthand::Space => c.is_whitespace(),
        }
    }
}

/// An item inside a character set [...]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassItem {
    Char(char),
    /// Inclusive range, `lo <= hi`
    Range(char, char),
    Shorthand(Shorthand),
    NegatedShorthand(Shorthand),
}

impl ClassItem {
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            ClassItem::Char(ch) => c == *ch,
            ClassItem::Range(lo, hi) => c >= *lo && c <= *hi,
            ClassItem::Shorthand(class) => class.matches(c),
            ClassItem::NegatedShorthand(class) => !class.matches(c),
        }
    }
}

/// A set of members plus a negation flag.
/// Membership is `any(item matches) XOR negated`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharClass {
    pub items: Vec<ClassItem>,
    pub negated: bool,
}

impl CharClass {
    pub fn new(items: Vec<ClassItem>, negated: bool) -> Self {
        Self { items, negated }
    }

    /// Single-shorthand class, as produced by a bare `\d` or `\S` outside brackets.
    pub fn shorthand(class: Shorthand, negated: bool) -> Self {
        Self {
            items: vec![ClassItem::Shorthand(class)],
            negated,
        }
    }

    #[inline]
    pub fn matches(&self, c: char) -> bool {
        let found = self.items.iter().any(|item| item.matches(c));
        found != self.negated
    }

    /// Check that every range is well-formed. `offset` is reported on failure.
    pub fn validate(&self, offset: usize) -> PatternResult<()> {
        if self.items.is_empty() {
            return Err(PatternSyntaxError::new(SyntaxErrorKind::EmptyClass, offset));
        }
        for item in &self.items {
            if let ClassItem::Range(lo, hi) = item
                && lo > hi
            {
                return Err(PatternSyntaxError::new(
                    SyntaxErrorKind::InvalidRange(*lo, *hi),
                    offset,
                ));
            }
        }
        Ok(())
    }
}
