// Pattern compiler: pattern string -> Node tree
//
// Syntax: literals, `.`, `[set]` / `[^set]` with ranges, the escapes `\d \w \s`
// (uppercase inverts) and `\n \t \r`, and the greedy quantifiers `*`, `+`, `?`.
// Every quantifier wraps exactly one atom.

mod ast;
mod class;
mod parser;

pub use ast::Node;
pub use class::{CharClass, ClassItem, Shorthand};
pub use parser::parse_pattern;
