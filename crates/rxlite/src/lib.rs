// rxlite
// A small backtracking regular-expression engine: literals, `.`, character
// classes and the greedy quantifiers `*`, `+`, `?`.

#[cfg(test)]
mod test;

pub mod cache;
pub mod error;
pub mod matcher;
pub mod option;
pub mod pattern;
pub mod regex;
mod replace;
#[cfg(feature = "serde")]
pub mod serde;

pub use cache::PatternCache;
pub use error::{PatternResult, PatternSyntaxError, SyntaxErrorKind};
pub use option::MatchOption;
pub use pattern::{CharClass, ClassItem, Node, Shorthand};
pub use regex::{Match, Matches, Regex};
