//! Node text parser
//!
//! Two stages: [`extract::extract_records`] finds brace-delimited records in
//! whitespace-normalized input, and [`decode::decode_record`] turns each one
//! into a [`ParsedNode`]. Records that fail to decode are dropped.

pub mod decode;
pub mod extract;

use log::{debug, warn};
use thiserror::Error;

use crate::models::ParsedNode;
use crate::utils::normalize_whitespace;

pub use decode::decode_record;
pub use extract::extract_records;

/// Why a record produced no node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("record is empty")]
    EmptyRecord,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{key}' is not an integer: {value}")]
    InvalidInteger { key: &'static str, value: String },
}

/// Parse every node in `input`, in input order.
///
/// Never fails: records that cannot be decoded are logged and skipped.
pub fn parse_nodes(input: &str) -> Vec<ParsedNode> {
    let normalized = normalize_whitespace(input);
    let mut nodes = Vec::new();

    for (index, record) in extract_records(&normalized).into_iter().enumerate() {
        match decode_record(record) {
            Ok(node) => nodes.push(node),
            Err(err @ DecodeError::InvalidInteger { .. }) => {
                warn!("Skipping record #{}: {}", index + 1, err);
            }
            Err(err) => debug!("Skipping record #{}: {}", index + 1, err),
        }
    }

    debug!("Parsed {} node(s)", nodes.len());
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeValue;

    #[test]
    fn test_parse_preserves_order() {
        let nodes = parse_nodes(
            "{name: a, server: s1, type: ss}\n{name: b, server: s2, type: vmess}\r\n{name: c, server: s3, type: trojan}",
        );
        let names: Vec<_> = nodes.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_drops_invalid_records() {
        let nodes = parse_nodes(
            "{} {name: a, type: ss} {name: b, server: s, type: ss, port: x} {name: c, server: s, type: ss}",
        );
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name(), "c");
    }

    #[test]
    fn test_parse_multiline_record() {
        let nodes = parse_nodes(
            "{\n  name: \"multi line\",\n  server:   example.com,\n  type: trojan,\n  port:\n 443\n}",
        );
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text("name").as_deref(), Some("multi line"));
        assert_eq!(nodes[0].get("port"), Some(&NodeValue::Integer(443)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_nodes("").is_empty());
        assert!(parse_nodes("   \n ").is_empty());
    }
}
