//! Parsed node model
//!
//! A [`ParsedNode`] is the decoded form of one brace-delimited record. Values
//! keep the textual form they had in the input, except `port` and `alterId`
//! which are stored as integers.

use std::collections::HashMap;
use std::fmt;

/// Prefix of the flattened WebSocket option keys.
pub const WS_OPTS_PREFIX: &str = "ws-opts";
/// Flattened key holding the WebSocket path.
pub const WS_PATH_KEY: &str = "ws-opts.path";
/// Flattened key holding the WebSocket `Host` header.
pub const WS_HOST_KEY: &str = "ws-opts.headers.Host";

/// Keys whose values are coerced to integers after decoding.
pub const INTEGER_KEYS: [&str; 2] = ["port", "alterId"];

/// Keys every retained node must carry with a non-empty value.
pub const IDENTITY_KEYS: [&str; 3] = ["name", "server", "type"];

/// A single decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    Text(String),
    Integer(i64),
}

impl NodeValue {
    /// Boolean reading of the value.
    ///
    /// Text is truthy when non-empty, whatever it spells (`"false"`
    /// included); integers are truthy unless zero.
    pub fn is_truthy(&self) -> bool {
        match self {
            NodeValue::Text(s) => !s.is_empty(),
            NodeValue::Integer(n) => *n != 0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeValue::Text(s) => Some(s),
            NodeValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            NodeValue::Integer(n) => Some(*n),
            NodeValue::Text(_) => None,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, NodeValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for NodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeValue::Text(s) => f.write_str(s),
            NodeValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        NodeValue::Text(value.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        NodeValue::Text(value)
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        NodeValue::Integer(value)
    }
}

/// One decoded proxy node.
///
/// Read-only once built: the decoder (or [`FromIterator`]) is the only way
/// to populate one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNode {
    fields: HashMap<String, NodeValue>,
}

impl ParsedNode {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: NodeValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&NodeValue> {
        self.fields.get(key)
    }

    /// Value of `key` rendered as text, if present.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(NodeValue::to_string)
    }

    /// Value of `key` rendered as text, or `default` when absent.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// Whether `key` is present and truthy. See [`NodeValue::is_truthy`].
    pub fn flag(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(NodeValue::is_truthy)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Whether `key` is present with a non-empty value.
    pub fn has_value(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|v| !v.is_empty())
    }

    /// The `name` field, empty if missing.
    pub fn name(&self) -> String {
        self.text_or("name", "")
    }

    /// The raw `type` field, empty if missing.
    pub fn node_type(&self) -> String {
        self.text_or("type", "")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, NodeValue)> for ParsedNode {
    fn from_iter<I: IntoIterator<Item = (K, NodeValue)>>(iter: I) -> Self {
        let mut node = ParsedNode::default();
        for (key, value) in iter {
            node.insert(key, value);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(NodeValue::from("true").is_truthy());
        assert!(NodeValue::from("yes").is_truthy());
        assert!(!NodeValue::from("").is_truthy());
        assert!(NodeValue::from("false").is_truthy());
        assert!(NodeValue::from("0").is_truthy());
        assert!(NodeValue::Integer(1).is_truthy());
        assert!(!NodeValue::Integer(0).is_truthy());
    }

    #[test]
    fn test_text_rendering() {
        let node: ParsedNode = [
            ("name", NodeValue::from("A")),
            ("port", NodeValue::Integer(443)),
        ]
        .into_iter()
        .collect();

        assert_eq!(node.text("port").as_deref(), Some("443"));
        assert_eq!(node.text_or("cipher", "auto"), "auto");
        assert_eq!(node.name(), "A");
        assert_eq!(node.node_type(), "");
        assert!(!node.flag("tls"));
    }

    #[test]
    fn test_has_value() {
        let node: ParsedNode = [("name", NodeValue::from("")), ("server", NodeValue::from("s"))]
            .into_iter()
            .collect();
        assert!(node.contains_key("name"));
        assert!(!node.has_value("name"));
        assert!(node.has_value("server"));
    }
}
