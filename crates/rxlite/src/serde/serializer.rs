use serde::Serialize;

use crate::pattern::Node;
use crate::regex::Regex;

#[derive(Serialize)]
struct Exported<'a> {
    pattern: &'a str,
    ast: &'a Node,
}

impl<'a> Exported<'a> {
    fn new(regex: &'a Regex) -> Self {
        Self {
            pattern: regex.as_str(),
            ast: regex.ast(),
        }
    }
}

/// Export a compiled pattern as a JSON value
pub fn to_json(regex: &Regex) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(Exported::new(regex))
}

/// Export a compiled pattern as a JSON string
pub fn to_json_string(regex: &Regex, pretty: bool) -> Result<String, serde_json::Error> {
    let exported = Exported::new(regex);
    if pretty {
        serde_json::to_string_pretty(&exported)
    } else {
        serde_json::to_string(&exported)
    }
}
