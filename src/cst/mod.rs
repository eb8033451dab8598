//! Concrete syntax tree for Java source
//!
//! Nodes mirror grammar productions and carry no source positions, so two
//! parses of differently formatted but equivalent text compare equal.

mod nodes;
mod printer;

pub use nodes::*;
pub use printer::*;

/// Render a node as pretty JSON
pub fn to_json<T: serde::Serialize>(node: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Render a node as a JSON value
pub fn to_json_value<T: serde::Serialize>(node: &T) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(node)
}
