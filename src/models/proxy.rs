//! Proxy type identification
//!
//! Maps the `type` field of a parsed node onto the schemes that can be
//! encoded as subscription URIs.

use std::fmt;

/// Represents the type of a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    Unknown,
    Shadowsocks,
    VMess,
    Vless,
    Trojan,
    Hysteria2,
}

impl ProxyType {
    /// Resolve the value of a node's `type` field. Matching is exact.
    pub fn from_type_field(value: &str) -> Self {
        match value {
            "ss" => ProxyType::Shadowsocks,
            "vmess" => ProxyType::VMess,
            "vless" => ProxyType::Vless,
            "trojan" => ProxyType::Trojan,
            "hysteria2" => ProxyType::Hysteria2,
            _ => ProxyType::Unknown,
        }
    }

    /// Human-readable name, as used in conversion error messages.
    pub fn name(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "Shadowsocks",
            ProxyType::VMess => "VMess",
            ProxyType::Vless => "VLess",
            ProxyType::Trojan => "Trojan",
            ProxyType::Hysteria2 => "Hysteria2",
            ProxyType::Unknown => "Unknown",
        }
    }

    /// URI scheme prefix, including the `://` separator.
    pub fn scheme(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "ss://",
            ProxyType::VMess => "vmess://",
            ProxyType::Vless => "vless://",
            ProxyType::Trojan => "trojan://",
            ProxyType::Hysteria2 => "hysteria2://",
            ProxyType::Unknown => "",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
