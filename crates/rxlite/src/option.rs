/// Nesting budget for the backtracking matcher
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Capacity used by `PatternCache::default()`
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOption {
    /// Maximum recursion depth of one match attempt. Each quantified element
    /// of a sequence nests one level, as does each repetition of a node that
    /// is not a single atom. Plain atoms and atom repetitions cost nothing.
    pub max_depth: usize,
}

impl Default for MatchOption {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
