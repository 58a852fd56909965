// src/services/fetcher.rs

//! Product page fetcher.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::models::Config;

/// Fetches the watched product page over HTTP.
pub struct PageFetcher {
    client: Client,
    url: String,
}

impl PageFetcher {
    /// Create a fetcher with the configured User-Agent and timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.watch.product_url.clone(),
        })
    }

    /// Fetch the product page body.
    ///
    /// Any transport error or non-success HTTP status is an error; the
    /// caller treats failure as "cannot determine availability".
    pub async fn fetch(&self) -> Result<String> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
