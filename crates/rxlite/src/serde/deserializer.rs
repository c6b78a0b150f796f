use serde::Deserialize;
use smol_str::SmolStr;

use super::JsonError;
use crate::option::MatchOption;
use crate::pattern::Node;
use crate::regex::Regex;

#[derive(Deserialize)]
struct Imported {
    pattern: String,
    ast: Node,
}

/// Rebuild a `Regex` from an exported JSON value
pub fn from_json(value: &serde_json::Value) -> Result<Regex, JsonError> {
    let imported = Imported::deserialize(value)?;
    build(imported)
}

/// Rebuild a `Regex` from an exported JSON string
pub fn from_json_str(json: &str) -> Result<Regex, JsonError> {
    let imported: Imported = serde_json::from_str(json)?;
    build(imported)
}

fn build(imported: Imported) -> Result<Regex, JsonError> {
    imported.ast.validate()?;
    Ok(Regex::from_parts(
        SmolStr::new(imported.pattern),
        imported.ast,
        MatchOption::default(),
    ))
}
