//! Configuration for notification delivery.
//!
//! Every sink is optional: presence of its environment variables is what
//! enables it. With nothing configured, events fall through to local
//! logging and the endpoints still report success.

use serde::{Deserialize, Serialize};

/// Notification sink configuration.
///
/// Sinks are attempted in a fixed priority order: Discord webhook first,
/// then the Resend email API, then the Telegram bot API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Discord webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_webhook_url: Option<String>,
    /// Resend API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend_api_key: Option<String>,
    /// Recipient address for email notifications.
    pub notification_email: String,
    /// Telegram bot token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_bot_token: Option<String>,
    /// Telegram chat ID the bot posts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_chat_id: Option<String>,
    /// Timeout for outbound requests, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            discord_webhook_url: None,
            resend_api_key: None,
            notification_email: "hani.mohamedqa@gmail.com".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            request_timeout_secs: 10,
        }
    }
}

impl NotifyConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DISCORD_WEBHOOK_URL") {
            config.discord_webhook_url = Some(url);
        }
        if let Ok(key) = std::env::var("RESEND_API_KEY") {
            config.resend_api_key = Some(key);
        }
        if let Ok(email) = std::env::var("NOTIFICATION_EMAIL") {
            config.notification_email = email;
        }
        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            config.telegram_bot_token = Some(token);
        }
        if let Ok(chat_id) = std::env::var("TELEGRAM_CHAT_ID") {
            config.telegram_chat_id = Some(chat_id);
        }

        config
    }

    /// Builder: set the Discord webhook URL.
    pub fn with_discord(mut self, url: impl Into<String>) -> Self {
        self.discord_webhook_url = Some(url.into());
        self
    }

    /// Builder: set the Resend API key.
    pub fn with_resend(mut self, api_key: impl Into<String>) -> Self {
        self.resend_api_key = Some(api_key.into());
        self
    }

    /// Builder: set the Telegram bot token and chat ID.
    pub fn with_telegram(
        mut self,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        self.telegram_bot_token = Some(token.into());
        self.telegram_chat_id = Some(chat_id.into());
        self
    }

    /// Whether the Telegram sink is fully configured.
    pub fn telegram_configured(&self) -> bool {
        self.telegram_bot_token.is_some() && self.telegram_chat_id.is_some()
    }

    /// Whether any delivery sink is configured.
    pub fn any_sink_configured(&self) -> bool {
        self.discord_webhook_url.is_some()
            || self.resend_api_key.is_some()
            || self.telegram_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_sinks() {
        let config = NotifyConfig::default();
        assert!(!config.any_sink_configured());
        assert!(!config.telegram_configured());
    }

    #[test]
    fn test_telegram_requires_both_token_and_chat_id() {
        let mut config = NotifyConfig::default();
        config.telegram_bot_token = Some("123:abc".to_string());
        assert!(!config.telegram_configured());

        config.telegram_chat_id = Some("42".to_string());
        assert!(config.telegram_configured());
    }

    #[test]
    fn test_builder_enables_sinks() {
        let config = NotifyConfig::default()
            .with_discord("https://discord.com/api/webhooks/1/x")
            .with_resend("re_123");
        assert!(config.any_sink_configured());
        assert!(config.discord_webhook_url.is_some());
        assert!(config.resend_api_key.is_some());
    }
}
