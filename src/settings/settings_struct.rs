use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Runtime settings for the command-line and web front ends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u32,
    #[serde(default = "default_max_concur_threads")]
    pub max_concur_threads: u32,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Terminate command-line output with a newline.
    #[serde(default)]
    pub trailing_newline: bool,
}

// Default value functions for serde
pub fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

pub fn default_listen_port() -> u32 {
    2786
}

pub fn default_max_concur_threads() -> u32 {
    4
}

pub fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
            max_concur_threads: default_max_concur_threads(),
            log_level: default_log_level(),
            trailing_newline: false,
        }
    }
}

/// Both file formats keep the values under a `common` section.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    common: Settings,
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings text. YAML is recognised by its `common:` section,
    /// anything else is read as TOML.
    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = if content.contains("common:") {
            serde_yaml::from_str(content)?
        } else {
            toml::from_str(content)?
        };

        let mut settings = file.common;
        if settings.listen_address.trim().is_empty() {
            settings.listen_address = default_listen_address();
        }
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_content(&content)
    }

    /// `address:port` to bind, unless the address already carries a port.
    pub fn bind_address(&self) -> String {
        if self.listen_address.contains(':') {
            self.listen_address.clone()
        } else {
            format!("{}:{}", self.listen_address, self.listen_port)
        }
    }
}
