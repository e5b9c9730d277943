//! Node to URI conversion
//!
//! [`convert_node`] picks the encoder matching a node's `type`; the batch
//! helpers run the parser and keep one output line per parsed node.

pub mod uri;

use log::debug;

use crate::models::{ParsedNode, ProxyType};
use crate::parser::parse_nodes;
use uri::{
    hysteria2::proxy_to_hysteria2, ss::proxy_to_ss, trojan::proxy_to_trojan,
    vless::proxy_to_vless, vmess::proxy_to_vmess,
};

pub use uri::ConvertError;

/// Convert one node to its URI, or to an error line.
///
/// Never fails: encoder errors and unknown types become descriptive text.
pub fn convert_node(node: &ParsedNode) -> String {
    let node_type = node.node_type();
    let result: Result<String, ConvertError> = match ProxyType::from_type_field(&node_type) {
        ProxyType::Shadowsocks => proxy_to_ss(node),
        ProxyType::VMess => proxy_to_vmess(node),
        ProxyType::Vless => proxy_to_vless(node),
        ProxyType::Trojan => proxy_to_trojan(node),
        ProxyType::Hysteria2 => proxy_to_hysteria2(node),
        ProxyType::Unknown => return format!("Unknown node type: {}", node_type),
    };

    result.unwrap_or_else(|err| {
        debug!("Conversion of node '{}' failed: {}", node.name(), err);
        err.to_string()
    })
}

/// Parse `input` and convert every node, one line per node, in input order.
pub fn convert_nodes(input: &str) -> Vec<String> {
    parse_nodes(input).iter().map(convert_node).collect()
}

/// Parse `input` and convert every node, joining the lines with `\n`.
pub fn convert_all(input: &str) -> String {
    convert_nodes(input).join("\n")
}
