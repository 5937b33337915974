//! # Client configuration: where the backend lives
//!
//! The dashboard talks to a backend it does not own. This module defines the
//! small TOML configuration that points the client at it (desktop file:
//! `<config-dir>/dealdeck/config.toml`; the web build derives both URLs from
//! the page origin and never reads a file).
//!
//! ## Structure
//!
//! ```toml
//! api_base_url = "https://api.dealdeck.app/api/v1"
//! ws_base_url = "wss://api.dealdeck.app"
//! ```
//!
//! `DEALDECK_API_URL` / `DEALDECK_WS_URL` override the file on native, so a
//! staging backend can be targeted without editing anything.
//!
//! Missing or empty config is equivalent to [`ClientConfig::default`], which
//! points at the production backend.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://api.dealdeck.app/api/v1".to_string()
}

fn default_ws_base() -> String {
    "wss://api.dealdeck.app".to_string()
}

/// Backend endpoints the client connects to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for REST calls, including the version prefix.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Base URL for WebSocket channels (scheme + host only).
    #[serde(default = "default_ws_base")]
    pub ws_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            ws_base_url: default_ws_base(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, ws_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ws_base_url: ws_base_url.into(),
        }
    }

    /// The well-known filename for the desktop config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the native config: file if present, then env overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_native() -> Self {
        let mut config = dirs::config_dir()
            .map(|d| d.join("dealdeck").join(Self::filename()))
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|raw| Self::from_toml(&raw).ok())
            .unwrap_or_default();

        if let Ok(url) = std::env::var("DEALDECK_API_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        if let Ok(url) = std::env::var("DEALDECK_WS_URL") {
            if !url.trim().is_empty() {
                config.ws_base_url = url;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default_config() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn toml_roundtrip() {
        let config = ClientConfig::new("http://localhost:8800/api/v1", "ws://localhost:8800");
        let raw = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&raw).unwrap(), config);
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config = ClientConfig::from_toml("api_base_url = \"http://10.0.0.5/api/v1\"").unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5/api/v1");
        assert_eq!(config.ws_base_url, ClientConfig::default().ws_base_url);
    }
}
