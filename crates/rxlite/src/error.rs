/// What went wrong while compiling a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// `[` without a matching `]`
    UnclosedClass,
    /// `*`, `+` or `?` with nothing to repeat
    DanglingQuantifier(char),
    /// Class range whose lower bound is above its upper bound
    InvalidRange(char, char),
    /// `\x` where `x` is an alphanumeric with no meaning
    UnknownEscape(char),
    /// Pattern ends with a lone `\`
    TrailingBackslash,
    /// Class with no members (only from hand-built trees)
    EmptyClass,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxErrorKind::UnclosedClass => write!(f, "unclosed character class (missing ']')"),
            SyntaxErrorKind::DanglingQuantifier(q) => {
                write!(f, "quantifier '{}' has nothing to repeat", q)
            }
            SyntaxErrorKind::InvalidRange(lo, hi) => {
                write!(f, "invalid class range '{}-{}'", lo, hi)
            }
            SyntaxErrorKind::UnknownEscape(c) => write!(f, "unknown escape '\\{}'", c),
            SyntaxErrorKind::TrailingBackslash => write!(f, "pattern ends with '\\'"),
            SyntaxErrorKind::EmptyClass => write!(f, "empty character class"),
        }
    }
}

/// Compile-time failure. No partial automaton is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte offset in the pattern where the offending construct starts
    pub offset: usize,
}

impl PatternSyntaxError {
    pub fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl std::fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

impl std::error::Error for PatternSyntaxError {}

pub type PatternResult<T> = Result<T, PatternSyntaxError>;
