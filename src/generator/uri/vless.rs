use super::{require_all, ConvertError};
use crate::models::{ParsedNode, ProxyType, WS_HOST_KEY, WS_PATH_KEY};

/// Optional query parameters in output order: (node key, query name).
const VLESS_PARAMS: [(&str, &str); 5] = [
    ("flow", "flow"),
    ("servername", "sni"),
    (WS_PATH_KEY, "path"),
    (WS_HOST_KEY, "host"),
    ("client-fingerprint", "fp"),
];

/// Build `vless://uuid@server:port?params#name`.
///
/// Only truthy parameters are written. The `?` is kept even when the query
/// is empty.
pub fn proxy_to_vless(node: &ParsedNode) -> Result<String, ConvertError> {
    let scheme = ProxyType::Vless;

    let mut params = Vec::new();
    if node.flag("tls") {
        params.push("security=tls".to_string());
    }
    for (key, param) in VLESS_PARAMS {
        if node.flag(key) {
            params.push(format!("{}={}", param, node.text_or(key, "")));
        }
    }

    let [uuid, server, port, name] = require_all(node, scheme, ["uuid", "server", "port", "name"])?;

    Ok(format!(
        "{}{}@{}:{}?{}#{}",
        scheme.scheme(),
        uuid,
        server,
        port,
        params.join("&"),
        name
    ))
}
