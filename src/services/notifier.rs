// src/services/notifier.rs

//! Discord webhook notifier.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::Result;
use crate::models::Config;

/// Outbound notification seam.
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver a message to the configured destination.
    ///
    /// Returns `Ok(false)` when delivery was skipped because no
    /// destination is configured. Transport failures are errors; the
    /// caller decides whether they abort anything (they never abort
    /// status tracking).
    async fn notify(&self, message: &str) -> Result<bool>;
}

/// Posts messages to a Discord webhook as `{"content": <message>}`.
pub struct DiscordNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    /// Create a notifier from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            webhook_url: config.resolve_webhook_url(),
        })
    }

    /// Whether a webhook destination is configured.
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}

#[async_trait]
impl Notify for DiscordNotifier {
    async fn notify(&self, message: &str) -> Result<bool> {
        let Some(url) = &self.webhook_url else {
            log::info!("No Discord webhook URL configured; skipping notification.");
            return Ok(false);
        };

        self.client
            .post(url)
            .json(&json!({ "content": message }))
            .send()
            .await?
            .error_for_status()?;

        log::info!("Discord notification sent.");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_notifier_skips() {
        let notifier = DiscordNotifier {
            client: Client::new(),
            webhook_url: None,
        };

        assert!(!notifier.is_configured());
        let sent = notifier.notify("hello").await.unwrap();
        assert!(!sent);
    }
}
