// Pattern parser
// Single left-to-right pass over the pattern, producing a Concat of (possibly
// quantified) atoms. No grouping or alternation, so no precedence beyond
// concatenation.

use super::ast::Node;
use super::class::{CharClass, ClassItem, Shorthand};
use crate::error::{PatternResult, PatternSyntaxError, SyntaxErrorKind};

/// Result of reading a backslash escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    Char(char),
    Class(Shorthand, bool),
}

/// Parse a pattern string. The root is always a `Node::Concat`.
pub fn parse_pattern(pattern: &str) -> PatternResult<Node> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut seq: Vec<Node> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let (offset, c) = chars[pos];
        match c {
            '.' => {
                seq.push(Node::AnyChar);
                pos += 1;
            }
            '[' => {
                let (class, new_pos) = parse_set(&chars, pos)?;
                seq.push(Node::Class(class));
                pos = new_pos;
            }
            '\\' => {
                let (escape, new_pos) = parse_escape(&chars, pos)?;
                seq.push(match escape {
                    Escape::Char(ch) => Node::Literal(ch),
                    Escape::Class(class, negated) => {
                        Node::Class(CharClass::shorthand(class, negated))
                    }
                });
                pos = new_pos;
            }
            '*' | '+' | '?' => {
                // Only a bare atom can be repeated; `a**` has nothing left to repeat.
                let last = match seq.pop() {
                    Some(node) if node.is_atom() => Box::new(node),
                    _ => {
                        return Err(PatternSyntaxError::new(
                            SyntaxErrorKind::DanglingQuantifier(c),
                            offset,
                        ));
                    }
                };
                seq.push(match c {
                    '*' => Node::Star(last),
                    '+' => Node::Plus(last),
                    _ => Node::Optional(last),
                });
                pos += 1;
            }
            _ => {
                seq.push(Node::Literal(c));
                pos += 1;
            }
        }
    }

    Ok(Node::Concat(seq))
}

/// Read `\x` at `chars[pos]`. Returns the escape and the index past it.
fn parse_escape(chars: &[(usize, char)], pos: usize) -> PatternResult<(Escape, usize)> {
    let (offset, _) = chars[pos];
    let Some(&(_, next)) = chars.get(pos + 1) else {
        return Err(PatternSyntaxError::new(
            SyntaxErrorKind::TrailingBackslash,
            offset,
        ));
    };

    let escape = match next {
        'n' => Escape::Char('\n'),
        't' => Escape::Char('\t'),
        'r' => Escape::Char('\r'),
        c => match Shorthand::from_escape(c) {
            Some((class, negated)) => Escape::Class(class, negated),
            None if c.is_alphanumeric() => {
                return Err(PatternSyntaxError::new(
                    SyntaxErrorKind::UnknownEscape(c),
                    offset,
                ));
            }
            None => Escape::Char(c),
        },
    };
    Ok((escape, pos + 2))
}

/// Read one member inside a set: an escape or a plain character.
fn parse_member(chars: &[(usize, char)], pos: usize) -> PatternResult<(Escape, usize)> {
    match chars[pos].1 {
        '\\' => parse_escape(chars, pos),
        c => Ok((Escape::Char(c), pos + 1)),
    }
}

fn escape_item(escape: Escape) -> ClassItem {
    match escape {
        Escape::Char(c) => ClassItem::Char(c),
        Escape::Class(class, false) => ClassItem::Shorthand(class),
        Escape::Class(class, true) => ClassItem::NegatedShorthand(class),
    }
}

/// Parse `[...]` starting at `chars[start]` (which is `[`).
/// Returns the class and the index past the closing `]`.
fn parse_set(chars: &[(usize, char)], start: usize) -> PatternResult<(CharClass, usize)> {
    let open_offset = chars[start].0;
    let unclosed = || PatternSyntaxError::new(SyntaxErrorKind::UnclosedClass, open_offset);

    let mut pos = start + 1; // Skip '['
    let negated = chars.get(pos).is_some_and(|&(_, c)| c == '^');
    if negated {
        pos += 1;
    }

    // ']' as first member is literal
    let mut items = Vec::new();
    if chars.get(pos).is_some_and(|&(_, c)| c == ']') {
        items.push(ClassItem::Char(']'));
        pos += 1;
    }

    while pos < chars.len() && chars[pos].1 != ']' {
        let member_offset = chars[pos].0;
        let (member, next) = parse_member(chars, pos)?;

        // Range: lo-hi, unless the '-' is the last thing before ']'
        let is_range = matches!(member, Escape::Char(_))
            && next + 1 < chars.len()
            && chars[next].1 == '-'
            && chars[next + 1].1 != ']';

        if !is_range {
            items.push(escape_item(member));
            pos = next;
            continue;
        }

        let (upper, after) = parse_member(chars, next + 1)?;
        match (member, upper) {
            (Escape::Char(lo), Escape::Char(hi)) => {
                if lo > hi {
                    return Err(PatternSyntaxError::new(
                        SyntaxErrorKind::InvalidRange(lo, hi),
                        member_offset,
                    ));
                }
                items.push(ClassItem::Range(lo, hi));
            }
            // A shorthand cannot bound a range; the '-' is literal then.
            (lower, upper) => {
                items.push(escape_item(lower));
                items.push(ClassItem::Char('-'));
                items.push(escape_item(upper));
            }
        }
        pos = after;
    }

    if pos >= chars.len() {
        return Err(unclosed());
    }

    Ok((CharClass::new(items, negated), pos + 1)) // Skip ']'
}
