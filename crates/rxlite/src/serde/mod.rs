//! JSON import/export of compiled patterns
//!
//! The exported document holds the source pattern and its tree:
//! `{ "pattern": "[Tt]he", "ast": { "Concat": [...] } }`.
//! Importing re-checks the tree, so a hand-edited document with a reversed
//! class range is rejected.

mod deserializer;

mod serializer;

pub use deserializer::{from_json, from_json_str};

pub use serializer::{to_json, to_json_string};

#[derive(Debug)]
pub enum JsonError {
    /// Malformed document or wrong shape
    Json(serde_json::Error),
    /// Well-formed document holding an invalid tree
    Pattern(crate::error::PatternSyntaxError),
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonError::Json(e) => write!(f, "invalid pattern document: {}", e),
            JsonError::Pattern(e) => write!(f, "invalid pattern tree: {}", e),
        }
    }
}

impl std::error::Error for JsonError {}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        JsonError::Json(e)
    }
}

impl From<crate::error::PatternSyntaxError> for JsonError {
    fn from(e: crate::error::PatternSyntaxError) -> Self {
        JsonError::Pattern(e)
    }
}
