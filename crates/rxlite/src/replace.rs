// Substitution over the match scan
//
// Replacement templates:
// - `$0` or `$&`: the matched text
// - `$$`: literal `$`
// - any other `$` is copied as is

use crate::regex::{Match, Regex};

/// Expand a replacement template for one match
fn expand(template: &str, m: &Match, out: &mut String) {
    let mut rest = template;
    while let Some(i) = rest.find('$') {
        out.push_str(&rest[..i]);
        let after = &rest[i + 1..];
        match after.as_bytes().first() {
            Some(b'0') | Some(b'&') => {
                out.push_str(m.as_str());
                rest = &after[1..];
            }
            Some(b'$') => {
                out.push('$');
                rest = &after[1..];
            }
            _ => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
}

impl Regex {
    /// Replace every match with `replacement`.
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        self.replacen(text, 0, replacement)
    }

    /// Replace the first `limit` matches (`0` means all).
    pub fn replacen(&self, text: &str, limit: usize, replacement: &str) -> String {
        // Fast path: no '$' in the template, copy it verbatim
        if replacement.contains('$') {
            self.replace_with_impl(text, limit, |m, out| expand(replacement, m, out))
        } else {
            self.replace_with_impl(text, limit, |_, out| out.push_str(replacement))
        }
    }

    /// Replace every match with the string computed by `f`.
    pub fn replace_all_with<F>(&self, text: &str, mut f: F) -> String
    where
        F: FnMut(&Match) -> String,
    {
        self.replace_with_impl(text, 0, |m, out| out.push_str(&f(m)))
    }

    fn replace_with_impl<F>(&self, text: &str, limit: usize, mut f: F) -> String
    where
        F: FnMut(&Match, &mut String),
    {
        let limit = if limit == 0 { usize::MAX } else { limit };
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for m in self.find_iter(text).take(limit) {
            result.push_str(&text[last..m.start]);
            f(&m, &mut result);
            last = m.end;
        }
        result.push_str(&text[last..]);
        result
    }
}
