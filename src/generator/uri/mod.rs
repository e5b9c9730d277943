//! Per-scheme URI encoders
//!
//! Each encoder reads a [`ParsedNode`] and either builds the scheme's link or
//! reports the first required key it could not find.

pub mod hysteria2;
pub mod ss;
pub mod trojan;
pub mod vless;
pub mod vmess;

use thiserror::Error;

use crate::models::{ParsedNode, ProxyType};

/// Failure inside a single encoder. The `Display` text is the output line.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Error in {scheme} conversion: Missing '{key}' key")]
    MissingKey {
        scheme: ProxyType,
        key: &'static str,
    },

    #[error("Error in {scheme} conversion: {source}")]
    Json {
        scheme: ProxyType,
        #[source]
        source: serde_json::Error,
    },
}

/// Fetch a required key as text.
pub(crate) fn require(
    node: &ParsedNode,
    scheme: ProxyType,
    key: &'static str,
) -> Result<String, ConvertError> {
    node.text(key)
        .ok_or(ConvertError::MissingKey { scheme, key })
}

/// Fetch several required keys, reporting the first one missing.
pub(crate) fn require_all<const N: usize>(
    node: &ParsedNode,
    scheme: ProxyType,
    keys: [&'static str; N],
) -> Result<[String; N], ConvertError> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, key) in values.iter_mut().zip(keys) {
        *slot = require(node, scheme, key)?;
    }
    Ok(values)
}
