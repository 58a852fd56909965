//! Application configuration structures.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Environment variable supplying the Discord webhook URL.
///
/// When set (and non-empty) it takes precedence over `notify.webhook_url`
/// from the config file.
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Product page being watched
    #[serde(default)]
    pub watch: WatchConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Local file paths
    #[serde(default)]
    pub paths: PathsConfig,

    /// Notification settings
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.watch.product_name.trim().is_empty() {
            return Err(AppError::validation("watch.product_name is empty"));
        }
        Url::parse(&self.watch.product_url)?;
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.paths.status_file.trim().is_empty() {
            return Err(AppError::validation("paths.status_file is empty"));
        }
        Ok(())
    }

    /// Resolve the webhook destination, preferring the environment variable.
    ///
    /// Returns `None` when no destination is configured; notifications are
    /// then skipped with a diagnostic rather than failing.
    pub fn resolve_webhook_url(&self) -> Option<String> {
        env::var(WEBHOOK_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.notify.webhook_url.clone())
    }
}

/// Product page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Product page URL to poll
    #[serde(default = "defaults::product_url")]
    pub product_url: String,

    /// Display name used in notification messages
    #[serde(default = "defaults::product_name")]
    pub product_name: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            product_url: defaults::product_url(),
            product_name: defaults::product_name(),
        }
    }
}

/// HTTP client settings, shared by the fetcher and the notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Local file path settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// File holding the last known status token
    #[serde(default = "defaults::status_file")]
    pub status_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            status_file: defaults::status_file(),
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotifyConfig {
    /// Discord webhook URL; `DISCORD_WEBHOOK_URL` overrides this
    #[serde(default)]
    pub webhook_url: Option<String>,
}

/// Default values for configuration fields.
mod defaults {
    pub fn product_url() -> String {
        "https://in.amazfit.com/collections/smartwatches/products/amazfit-active".to_string()
    }

    pub fn product_name() -> String {
        "Amazfit Helio Strap".to_string()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (StockChecker)".to_string()
    }

    pub fn timeout() -> u64 {
        15
    }

    pub fn status_file() -> String {
        "last_status.txt".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.watch.product_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [watch]
            product_url = "https://example.com/product"
            "#,
        )
        .unwrap();

        assert_eq!(config.watch.product_url, "https://example.com/product");
        assert_eq!(config.http.timeout_secs, 15);
        assert_eq!(config.http.user_agent, "Mozilla/5.0 (StockChecker)");
        assert_eq!(config.paths.status_file, "last_status.txt");
        assert!(config.notify.webhook_url.is_none());
    }
}
