use log::debug;
use serde::Serialize;

use super::{require_all, ConvertError};
use crate::models::{ParsedNode, ProxyType, WS_HOST_KEY, WS_PATH_KEY};
use crate::utils::{base64_encode, to_ascii_json};

/// The JSON share format. Field order is the serialized key order.
#[derive(Debug, Serialize)]
struct VmessLink {
    v: &'static str,
    ps: String,
    add: String,
    port: String,
    id: String,
    aid: String,
    scy: String,
    net: String,
    #[serde(rename = "type")]
    header_type: &'static str,
    host: String,
    path: String,
    tls: &'static str,
}

/// Build `vmess://` followed by Base64 of the compact JSON share object.
pub fn proxy_to_vmess(node: &ParsedNode) -> Result<String, ConvertError> {
    let scheme = ProxyType::VMess;
    let [name, server, port, uuid] = require_all(node, scheme, ["name", "server", "port", "uuid"])?;

    let path = node.text_or(WS_PATH_KEY, "");
    let link = VmessLink {
        v: "2",
        ps: name,
        add: server,
        port,
        id: uuid,
        aid: node.text_or("alterId", "0"),
        scy: node.text_or("cipher", "auto"),
        net: node.text_or("network", "tcp"),
        header_type: "none",
        host: node
            .text(WS_HOST_KEY)
            .or_else(|| node.text("servername"))
            .unwrap_or_default(),
        path,
        tls: if node.flag("tls") { "tls" } else { "" },
    };
    debug!("Converting vmess node with path: {}", link.path);

    let json = to_ascii_json(&link).map_err(|source| ConvertError::Json { scheme, source })?;
    Ok(format!("{}{}", scheme.scheme(), base64_encode(&json)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode_record;
    use crate::utils::base64::base64_decode;

    fn decode_link(link: &str) -> String {
        let payload = link.strip_prefix("vmess://").unwrap();
        base64_decode(payload, false)
    }

    #[test]
    fn test_vmess_defaults() {
        let node = decode_record("{name: M, server: m.example.com, type: vmess, uuid: u, port: 80}")
            .unwrap();
        let link = proxy_to_vmess(&node).unwrap();
        assert_eq!(
            decode_link(&link),
            r#"{"v":"2","ps":"M","add":"m.example.com","port":"80","id":"u","aid":"0","scy":"auto","net":"tcp","type":"none","host":"","path":"","tls":""}"#
        );
    }

    #[test]
    fn test_vmess_ws_opts() {
        let node = decode_record(
            r#"{name: "C", server: "s", type: "vmess", uuid: "u", port: 80, ws-opts: {path: "/ws", headers: {Host: "h.example.com"}}}"#,
        )
        .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&decode_link(&proxy_to_vmess(&node).unwrap())).unwrap();
        assert_eq!(json["host"], "h.example.com");
        assert_eq!(json["path"], "/ws");
    }

    #[test]
    fn test_vmess_full_fields() {
        let node = decode_record(
            "{name: M, server: s, type: vmess, uuid: u, port: 443, alterId: 64, cipher: aes-128-gcm, network: ws, tls: true, servername: sn}",
        )
        .unwrap();
        assert_eq!(
            decode_link(&proxy_to_vmess(&node).unwrap()),
            r#"{"v":"2","ps":"M","add":"s","port":"443","id":"u","aid":"64","scy":"aes-128-gcm","net":"ws","type":"none","host":"sn","path":"","tls":"tls"}"#
        );
    }

    #[test]
    fn test_vmess_exact_encoding() {
        let node = decode_record("{name: A, server: b, type: vmess, uuid: c, port: 1}").unwrap();
        assert_eq!(
            proxy_to_vmess(&node).unwrap(),
            format!(
                "vmess://{}",
                base64_encode(r#"{"v":"2","ps":"A","add":"b","port":"1","id":"c","aid":"0","scy":"auto","net":"tcp","type":"none","host":"","path":"","tls":""}"#)
            )
        );
    }

    #[test]
    fn test_vmess_non_ascii_name_is_escaped() {
        let node = decode_record("{name: 香港 01, server: s, type: vmess, uuid: u, port: 1}").unwrap();
        assert!(decode_link(&proxy_to_vmess(&node).unwrap())
            .contains(r#""ps":"\u9999\u6e2f 01""#));
    }

    #[test]
    fn test_vmess_missing_uuid() {
        let node = decode_record("{name: M, server: s, type: vmess, port: 80}").unwrap();
        assert_eq!(
            proxy_to_vmess(&node).unwrap_err().to_string(),
            "Error in VMess conversion: Missing 'uuid' key"
        );
    }
}
