// Backtracking matcher
//
// Matches a Node tree anchored at one byte offset of the text. Continuations
// carry "the rest of the pattern", so a greedy repetition can give characters
// back to whatever follows it, across concatenation boundaries.
//
// - Atom repetitions (the only kind the parser produces) are counted with a
//   loop and backed off one char at a time: no recursion per repetition.
// - Runs of unquantified atoms in a sequence advance in a loop. Only the
//   elements that need backtracking (quantifiers, nested sequences) recurse.
// - Any other repeated node goes through the general path, which recurses per
//   repetition.
// Every recursion level is charged to `MatchOption::max_depth`.

use std::cell::Cell;

use crate::option::MatchOption;
use crate::pattern::Node;

type Cont<'k> = &'k mut dyn FnMut(usize) -> Option<usize>;

/// Matching context for one anchored attempt
pub struct MatchState<'a> {
    text: &'a str,
    max_depth: usize,
    depth: Cell<usize>,
    // set once the depth budget is exceeded; the attempt then fails as a whole
    exhausted: Cell<bool>,
}

impl<'a> MatchState<'a> {
    pub fn new(text: &'a str, option: &MatchOption) -> Self {
        Self {
            text,
            max_depth: option.max_depth,
            depth: Cell::new(0),
            exhausted: Cell::new(false),
        }
    }

    /// Reset for reuse at another start offset
    #[inline]
    pub fn reset(&self) {
        self.depth.set(0);
        self.exhausted.set(false);
    }

    #[inline(always)]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text[pos..].chars().next()
    }

    /// Try to match `root` starting exactly at byte offset `pos`.
    /// Returns `Some(end)` (exclusive byte offset) on success.
    pub fn match_at(&self, root: &Node, pos: usize) -> Option<usize> {
        self.reset();
        let result = self.match_node(root, pos, &mut |end: usize| Some(end));
        if self.exhausted.get() { None } else { result }
    }

    fn match_node(&self, node: &Node, pos: usize, k: Cont) -> Option<usize> {
        if self.exhausted.get() {
            return None;
        }
        match node {
            Node::Literal(_) | Node::AnyChar | Node::Class(_) => {
                let c = self.char_at(pos)?;
                if node.matches_char(c) {
                    k(pos + c.len_utf8())
                } else {
                    None
                }
            }
            Node::Concat(nodes) => self.match_seq(nodes, pos, k),
            Node::Star(inner) => self.match_repeat(inner, 0, usize::MAX, pos, k),
            Node::Plus(inner) => self.match_repeat(inner, 1, usize::MAX, pos, k),
            Node::Optional(inner) => self.match_repeat(inner, 0, 1, pos, k),
        }
    }

    fn match_seq(&self, nodes: &[Node], mut pos: usize, k: Cont) -> Option<usize> {
        // Unquantified atoms never backtrack: step over them in place
        let mut nodes = nodes;
        while let Some((first, rest)) = nodes.split_first()
            && first.is_atom()
        {
            let c = self.char_at(pos)?;
            if !first.matches_char(c) {
                return None;
            }
            pos += c.len_utf8();
            nodes = rest;
        }

        let Some((first, rest)) = nodes.split_first() else {
            return k(pos);
        };
        if !self.enter(pos) {
            return None;
        }
        let result = self.match_node(first, pos, &mut |p: usize| self.match_seq(rest, p, &mut *k));
        self.leave();
        result
    }

    /// Charge one recursion level. On overflow the whole attempt is marked failed.
    fn enter(&self, pos: usize) -> bool {
        let depth = self.depth.get();
        if depth >= self.max_depth {
            if !self.exhausted.get() {
                log::warn!(
                    "pattern nested deeper than {} at offset {}, giving up",
                    self.max_depth,
                    pos
                );
                self.exhausted.set(true);
            }
            return false;
        }
        self.depth.set(depth + 1);
        true
    }

    #[inline]
    fn leave(&self) {
        self.depth.set(self.depth.get() - 1);
    }

    /// Greedy repetition with `min..=max` occurrences
    fn match_repeat(
        &self,
        inner: &Node,
        min: usize,
        max: usize,
        pos: usize,
        k: Cont,
    ) -> Option<usize> {
        if !inner.is_atom() {
            return self.match_repeat_general(inner, min, max, pos, k);
        }

        // Count maximum matches
        let mut count = 0;
        let mut end = pos;
        while count < max
            && let Some(c) = self.char_at(end)
            && inner.matches_char(c)
        {
            end += c.len_utf8();
            count += 1;
        }

        // Try from most to least
        while count >= min {
            if let Some(result) = k(end) {
                return Some(result);
            }
            if count == 0 {
                break;
            }
            // every repetition consumed exactly one char
            end -= self.text[..end].chars().next_back().map_or(1, char::len_utf8);
            count -= 1;
        }
        None
    }

    /// Repetition of a composite node. A repetition that consumes nothing ends
    /// the loop: it counts toward `min` once and is never retried.
    fn match_repeat_general(
        &self,
        inner: &Node,
        min: usize,
        max: usize,
        pos: usize,
        k: Cont,
    ) -> Option<usize> {
        if !self.enter(pos) {
            return None;
        }
        let result = self.repeat_once_more(inner, min, max, pos, k);
        self.leave();
        result
    }

    fn repeat_once_more(
        &self,
        inner: &Node,
        min: usize,
        max: usize,
        pos: usize,
        k: Cont,
    ) -> Option<usize> {
        if max > 0 {
            let greedy = self.match_node(inner, pos, &mut |p: usize| {
                if p == pos {
                    return if min == 1 { k(p) } else { None };
                }
                self.match_repeat_general(inner, min.saturating_sub(1), max - 1, p, &mut *k)
            });
            if greedy.is_some() {
                return greedy;
            }
        }
        if min == 0 { k(pos) } else { None }
    }
}
