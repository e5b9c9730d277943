use super::{require_all, ConvertError};
use crate::models::{ParsedNode, ProxyType};

/// Build `trojan://password@server:port?sni=...#name`.
///
/// The `sni` parameter is always written, empty when the node has none.
pub fn proxy_to_trojan(node: &ParsedNode) -> Result<String, ConvertError> {
    let scheme = ProxyType::Trojan;
    let [password, server, port] = require_all(node, scheme, ["password", "server", "port"])?;
    let sni = node.text_or("sni", "");
    let [name] = require_all(node, scheme, ["name"])?;

    Ok(format!(
        "{}{}@{}:{}?sni={}#{}",
        scheme.scheme(),
        password,
        server,
        port,
        sni,
        name
    ))
}
