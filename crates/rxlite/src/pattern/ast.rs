// Pattern tree produced by the parser

use std::fmt;

use super::class::{CharClass, ClassItem, Shorthand};
use crate::error::PatternResult;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Literal character
    Literal(char),
    /// Any character (.)
    AnyChar,
    /// Character set ([abc], [^a-z], \d ...)
    Class(CharClass),
    /// Sequence of nodes
    Concat(Vec<Node>),
    /// Zero or more, greedy (*)
    Star(Box<Node>),
    /// One or more, greedy (+)
    Plus(Box<Node>),
    /// Zero or one, greedy (?)
    Optional(Box<Node>),
}

impl Node {
    /// Literal, `.` or class: consumes exactly one character.
    #[inline]
    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::AnyChar | Node::Class(_))
    }

    /// Single-character test for atoms. Always false for composite nodes.
    #[inline(always)]
    pub fn matches_char(&self, c: char) -> bool {
        match self {
            Node::Literal(l) => *l == c,
            Node::AnyChar => true,
            Node::Class(class) => class.matches(c),
            _ => false,
        }
    }

    /// Check if the tree is a plain literal string (no classes, no repetition).
    /// Returns Some(string) if it is, None otherwise.
    pub fn as_literal_string(&self) -> Option<String> {
        match self {
            Node::Literal(c) => Some(c.to_string()),
            Node::Concat(nodes) => {
                let mut result = String::new();
                for node in nodes {
                    result.push_str(&node.as_literal_string()?);
                }
                Some(result)
            }
            _ => None,
        }
    }

    /// Total number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Literal(_) | Node::AnyChar | Node::Class(_) => 1,
            Node::Concat(nodes) => 1 + nodes.iter().map(Node::node_count).sum::<usize>(),
            Node::Star(inner) | Node::Plus(inner) | Node::Optional(inner) => {
                1 + inner.node_count()
            }
        }
    }

    /// Reject malformed class ranges anywhere in a hand-built tree.
    pub fn validate(&self) -> PatternResult<()> {
        match self {
            Node::Class(class) => class.validate(0),
            Node::Concat(nodes) => nodes.iter().try_for_each(Node::validate),
            Node::Star(inner) | Node::Plus(inner) | Node::Optional(inner) => inner.validate(),
            Node::Literal(_) | Node::AnyChar => Ok(()),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char, special: &[char]) -> fmt::Result {
    match c {
        '\n' => f.write_str("\\n"),
        '\t' => f.write_str("\\t"),
        '\r' => f.write_str("\\r"),
        c if special.contains(&c) => write!(f, "\\{}", c),
        c => write!(f, "{}", c),
    }
}

fn shorthand_letter(class: Shorthand, negated: bool) -> char {
    let letter = match class {
        Shorthand::Digit => 'd',
        Shorthand::Word => 'w',
        Shorthand::Space => 's',
    };
    if negated { letter.to_ascii_uppercase() } else { letter }
}

const PATTERN_SPECIALS: &[char] = &['.', '[', ']', '\\', '*', '+', '?'];
const CLASS_SPECIALS: &[char] = &[']', '\\', '^', '-'];

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A lone shorthand prints in its bare form: \d, \S
        if let [ClassItem::Shorthand(class)] = self.items.as_slice() {
            return write!(f, "\\{}", shorthand_letter(*class, self.negated));
        }
        f.write_str(if self.negated { "[^" } else { "[" })?;
        for item in &self.items {
            match item {
                ClassItem::Char(c) => write_escaped(f, *c, CLASS_SPECIALS)?,
                ClassItem::Range(lo, hi) => {
                    write_escaped(f, *lo, CLASS_SPECIALS)?;
                    f.write_str("-")?;
                    write_escaped(f, *hi, CLASS_SPECIALS)?;
                }
                ClassItem::Shorthand(class) => write!(f, "\\{}", shorthand_letter(*class, false))?,
                ClassItem::NegatedShorthand(class) => {
                    write!(f, "\\{}", shorthand_letter(*class, true))?
                }
            }
        }
        f.write_str("]")
    }
}

fn write_repeated(f: &mut fmt::Formatter<'_>, inner: &Node, op: char) -> fmt::Result {
    if inner.is_atom() {
        write!(f, "{}{}", inner, op)
    } else {
        write!(f, "({}){}", inner, op)
    }
}

/// Renders pattern syntax. Trees from the parser print back to an equivalent
/// pattern; a repeated composite node prints inside parentheses, which the
/// parser does not read back as a group.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(c) => write_escaped(f, *c, PATTERN_SPECIALS),
            Node::AnyChar => f.write_str("."),
            Node::Class(class) => write!(f, "{}", class),
            Node::Concat(nodes) => nodes.iter().try_for_each(|node| write!(f, "{}", node)),
            Node::Star(inner) => write_repeated(f, inner, '*'),
            Node::Plus(inner) => write_repeated(f, inner, '+'),
            Node::Optional(inner) => write_repeated(f, inner, '?'),
        }
    }
}
