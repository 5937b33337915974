//! Messaging integration settings (Telegram bot, WhatsApp sender).
//!
//! The backend never echoes full secrets back: `bot_token` / `api_key` come
//! back masked once set. Saving with the secret field left blank keeps the
//! stored value, so forms can round-trip without ever holding the real key.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelegramSettings {
    /// Bot token, masked in responses once configured.
    #[serde(default)]
    pub bot_token: String,
    /// Channel the bot posts deals to, e.g. `@dealdeck_deals`.
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub enabled: bool,
    /// Message template; `{title}`, `{price}`, `{url}` are substituted.
    #[serde(default)]
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppSettings {
    /// Provider API key, masked in responses once configured.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub sender_id: String,
    /// Group chats that receive deal broadcasts.
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_unconfigured() {
        let telegram: TelegramSettings = serde_json::from_str("{}").unwrap();
        assert!(!telegram.enabled);
        assert!(telegram.bot_token.is_empty());

        let whatsapp: WhatsAppSettings = serde_json::from_str("{}").unwrap();
        assert!(whatsapp.group_ids.is_empty());
    }
}
