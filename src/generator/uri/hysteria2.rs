use super::{require_all, ConvertError};
use crate::models::{ParsedNode, ProxyType};

/// Flag value as written in the query: the stored text lowercased, or
/// `false` when the key is absent.
fn flag_str(node: &ParsedNode, key: &str) -> String {
    node.text_or(key, "false").to_lowercase()
}

/// Build a `hysteria2://` link.
///
/// `auth`, `skip-cert-verify` and `udp` are always present in the query, in
/// that order. Flags are copied lowercased, not normalized.
pub fn proxy_to_hysteria2(node: &ParsedNode) -> Result<String, ConvertError> {
    let scheme = ProxyType::Hysteria2;
    let [password, server, port] = require_all(node, scheme, ["password", "server", "port"])?;
    let auth = node.text_or("auth", "");
    let skip_cert_verify = flag_str(node, "skip-cert-verify");
    let udp = flag_str(node, "udp");
    let [name] = require_all(node, scheme, ["name"])?;

    Ok(format!(
        "{}{}@{}:{}?auth={}&skip-cert-verify={}&udp={}#{}",
        scheme.scheme(),
        password,
        server,
        port,
        auth,
        skip_cert_verify,
        udp,
        name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode_record;

    #[test]
    fn test_hysteria2_defaults() {
        let node =
            decode_record("{name: H, server: h.example.com, type: hysteria2, port: 443, password: pw}")
                .unwrap();
        assert_eq!(
            proxy_to_hysteria2(&node).unwrap(),
            "hysteria2://pw@h.example.com:443?auth=&skip-cert-verify=false&udp=false#H"
        );
    }

    #[test]
    fn test_hysteria2_flags() {
        let node = decode_record(
            "{name: H, server: s, type: hysteria2, port: 443, password: pw, auth: tok, skip-cert-verify: True, udp: true}",
        )
        .unwrap();
        assert_eq!(
            proxy_to_hysteria2(&node).unwrap(),
            "hysteria2://pw@s:443?auth=tok&skip-cert-verify=true&udp=true#H"
        );
    }

    #[test]
    fn test_hysteria2_flags_copied_verbatim() {
        let node = decode_record(
            "{name: H, server: s, type: hysteria2, port: 443, password: pw, skip-cert-verify: 1, udp: FALSE}",
        )
        .unwrap();
        assert_eq!(
            proxy_to_hysteria2(&node).unwrap(),
            "hysteria2://pw@s:443?auth=&skip-cert-verify=1&udp=false#H"
        );
    }

    #[test]
    fn test_hysteria2_missing_port() {
        let node = decode_record("{name: H, server: s, type: hysteria2, password: pw}").unwrap();
        assert_eq!(
            proxy_to_hysteria2(&node).unwrap_err().to_string(),
            "Error in Hysteria2 conversion: Missing 'port' key"
        );
    }
}
