//! Best-effort notification delivery.
//!
//! Sinks are attempted in a fixed priority order: Discord webhook, then
//! the Resend email API, then the Telegram bot API (downloads only).
//! Each configured sink is attempted at most once; delivery stops at the
//! first success. Exhausting every sink is not an error for the caller:
//! the event is logged locally and the request still reports success.

mod payload;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::client::{resolve_location, ClientInfo, SourcePlatform};
use crate::config::NotifyConfig;

pub use payload::format_timestamp;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const EMAIL_FROM: &str = "portfolio@yourdomain.com";

/// A tracked page visit.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitEvent {
    /// Client-supplied ISO-8601 timestamp.
    pub timestamp: String,
    /// Path of the visited page.
    #[serde(default)]
    pub page: String,
}

/// A tracked CV download.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadEvent {
    /// Display name the visitor entered before downloading.
    pub name: String,
    /// Client-supplied ISO-8601 timestamp.
    pub timestamp: String,
}

/// Forwards events to external sinks with silent fallback.
pub struct Notifier {
    client: Client,
    config: NotifyConfig,
    resend_endpoint: String,
    telegram_api_base: String,
}

impl Notifier {
    /// Create a notifier. The shared HTTP client carries a bounded
    /// timeout so a hung sink delays only its own request.
    pub fn new(config: NotifyConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            resend_endpoint: RESEND_ENDPOINT.to_string(),
            telegram_api_base: TELEGRAM_API_BASE.to_string(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Forward a page-visit event. Returns whether any sink accepted it.
    pub async fn notify_visit(&self, event: &VisitEvent, client: &ClientInfo) -> bool {
        let location = resolve_location(&self.client, client.lookup_ip()).await;
        let source = SourcePlatform::detect(&client.referer);

        if let Some(url) = &self.config.discord_webhook_url {
            let embed = payload::visit_embed(event, client, &location, &source);
            if self.post_json(url, &embed, "Discord").await {
                info!("Visitor notification sent to Discord");
                return true;
            }
        }

        info!(
            page = %event.page,
            ip = %client.ip,
            location = %location.label,
            source = %source.platform,
            "No sink accepted visitor event; logged locally"
        );
        false
    }

    /// Forward a CV-download event through the sink chain. Returns
    /// whether any sink accepted it.
    pub async fn notify_download(&self, event: &DownloadEvent, client: &ClientInfo) -> bool {
        let location = resolve_location(&self.client, client.lookup_ip()).await;

        if let Some(url) = &self.config.discord_webhook_url {
            let embed = payload::download_embed(event, client, &location);
            if self.post_json(url, &embed, "Discord").await {
                info!("Download notification sent to Discord");
                return true;
            }
        }

        if let Some(api_key) = &self.config.resend_api_key {
            let body = json!({
                "from": EMAIL_FROM,
                "to": &self.config.notification_email,
                "subject": payload::download_email_subject(&location),
                "html": payload::download_email_html(event, client, &location),
            });
            let response = self
                .client
                .post(&self.resend_endpoint)
                .bearer_auth(api_key)
                .json(&body)
                .send()
                .await;
            match response {
                Ok(r) if r.status().is_success() => {
                    info!("Download notification sent via Resend");
                    return true;
                }
                Ok(r) => warn!("Resend email rejected with status {}", r.status()),
                Err(e) => warn!("Resend email failed: {}", e),
            }
        }

        if self.config.telegram_configured() {
            // Both checked by telegram_configured above.
            if let (Some(token), Some(chat_id)) = (
                &self.config.telegram_bot_token,
                &self.config.telegram_chat_id,
            ) {
                let url = format!("{}/bot{}/sendMessage", self.telegram_api_base, token);
                let body = json!({
                    "chat_id": chat_id,
                    "text": payload::download_telegram_text(event, client, &location),
                    "parse_mode": "Markdown",
                });
                if self.post_json(&url, &body, "Telegram").await {
                    info!("Download notification sent via Telegram");
                    return true;
                }
            }
        }

        info!(
            name = %event.name,
            ip = %client.ip,
            location = %location.label,
            time = %format_timestamp(&event.timestamp),
            "No notification service configured or reachable; download logged locally"
        );
        false
    }

    /// One delivery attempt. Any network error or non-success status is
    /// a failure, which sends the caller on to the next sink.
    async fn post_json(&self, url: &str, body: &serde_json::Value, sink: &str) -> bool {
        match self.client.post(url).json(body).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("{} delivery rejected with status {}", sink, response.status());
                false
            }
            Err(e) => {
                warn!("{} delivery failed: {}", sink, e);
                false
            }
        }
    }

    #[cfg(test)]
    fn with_endpoints(mut self, resend: impl Into<String>, telegram: impl Into<String>) -> Self {
        self.resend_endpoint = resend.into();
        self.telegram_api_base = telegram.into();
        self
    }
}
