use super::{require_all, ConvertError};
use crate::models::{ParsedNode, ProxyType};

/// Build `ss://cipher:password@server:port#name`.
///
/// The user info is written in plain text, not Base64.
pub fn proxy_to_ss(node: &ParsedNode) -> Result<String, ConvertError> {
    let scheme = ProxyType::Shadowsocks;
    let [cipher, password, server, port, name] =
        require_all(node, scheme, ["cipher", "password", "server", "port", "name"])?;

    Ok(format!(
        "{}{}:{}@{}:{}#{}",
        scheme.scheme(),
        cipher,
        password,
        server,
        port,
        name
    ))
}
