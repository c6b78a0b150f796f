// Caller-owned cache of compiled patterns
//
// Nothing in the crate caches implicitly. A caller that compiles the same
// patterns repeatedly keeps one of these and decides its size.

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::AHashMap;
use smol_str::SmolStr;

use crate::error::PatternResult;
use crate::option::{DEFAULT_CACHE_CAPACITY, MatchOption};
use crate::regex::Regex;

/// Pattern string -> compiled `Regex`, bounded by `capacity`.
/// When full, the oldest inserted entry is evicted first.
#[derive(Debug)]
pub struct PatternCache {
    entries: AHashMap<SmolStr, Arc<Regex>>,
    // insertion order, oldest first
    order: VecDeque<SmolStr>,
    capacity: usize,
    option: MatchOption,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl PatternCache {
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        Self::with_option(capacity, MatchOption::default())
    }

    /// Every pattern compiled through this cache uses `option`.
    pub fn with_option(capacity: usize, option: MatchOption) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: AHashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            option,
        }
    }

    /// Return the cached automaton for `pattern`, compiling it on a miss.
    /// Compile errors are returned and nothing is cached.
    pub fn get_or_compile(&mut self, pattern: &str) -> PatternResult<Arc<Regex>> {
        if let Some(regex) = self.entries.get(pattern) {
            return Ok(Arc::clone(regex));
        }

        let regex = Arc::new(Regex::with_option(pattern, self.option)?);
        if self.entries.len() >= self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            log::trace!("pattern cache full, evicting {:?}", oldest);
            self.entries.remove(&oldest);
        }

        let key = SmolStr::new(pattern);
        self.order.push_back(key.clone());
        self.entries.insert(key, Arc::clone(&regex));
        Ok(regex)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
