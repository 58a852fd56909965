// src/pipeline/check.rs

//! Single stock-check pass.
//!
//! One run is one linear pass: fetch the page, classify it, compare
//! against the stored status, and on a transition persist the new
//! status and send a notification. Scheduling of repeated passes is
//! left to an external invoker.

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{Config, StockStatus};
use crate::services::classifier;
use crate::services::{Notify, PageFetcher};
use crate::storage::StatusStore;
use crate::utils::timestamp_utc;

/// What a single check run observed and did.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Status computed this run
    pub current: StockStatus,
    /// Status loaded from the store (None on first run)
    pub previous: Option<StockStatus>,
    /// Whether a transition was detected (and persisted)
    pub changed: bool,
    /// Whether a notification was actually delivered
    pub notified: bool,
    /// Fetch failure, when the status is fail-closed rather than observed
    pub fetch_error: Option<String>,
}

/// Run one complete check pass.
///
/// Fetch and notification failures are logged and absorbed; only local
/// storage errors propagate.
pub async fn run_check(
    config: &Config,
    store: &dyn StatusStore,
    notifier: &dyn Notify,
) -> Result<CheckOutcome> {
    log::info!("--- Running stock check at {} ---", timestamp_utc(Utc::now()));

    let fetcher = PageFetcher::new(config)?;
    let page = fetcher.fetch().await;
    track(config, page, store, notifier).await
}

/// Classify a fetch result and drive the status transition.
///
/// Split from [`run_check`] so tests can inject page bodies and fetch
/// failures without a network.
pub async fn track(
    config: &Config,
    page: std::result::Result<String, AppError>,
    store: &dyn StatusStore,
    notifier: &dyn Notify,
) -> Result<CheckOutcome> {
    let (current, fetch_error) = match page {
        Ok(body) => {
            let class = classifier::classify_page(&body);
            log::info!(
                "Available phrases: {}, unavailable phrases: {}",
                class.found_available,
                class.found_unavailable
            );
            (class.status(), None)
        }
        Err(e) => {
            // Fail closed: an unreadable page counts as out of stock.
            log::warn!("Request failed: {e}");
            (StockStatus::OutOfStock, Some(e.to_string()))
        }
    };

    let previous = store.load().await?;
    let changed = previous != Some(current);
    let mut notified = false;

    if changed {
        store.save(current).await?;

        let message = transition_message(config, current);
        match notifier.notify(&message).await {
            Ok(sent) => notified = sent,
            Err(e) => {
                // Notification failure never aborts status tracking.
                log::error!("Discord notification failed: {e}");
            }
        }
    } else {
        log::info!("No change detected ({current}).");
    }

    log::info!("Current status: {current}");

    Ok(CheckOutcome {
        current,
        previous,
        changed,
        notified,
        fetch_error,
    })
}

/// Build the status-specific transition message.
fn transition_message(config: &Config, status: StockStatus) -> String {
    match status {
        StockStatus::InStock => format!(
            "✅ **{} is IN STOCK!**\n{}",
            config.watch.product_name, config.watch.product_url
        ),
        StockStatus::OutOfStock => format!(
            "❌ {} went OUT OF STOCK.\nChecked at {}",
            config.watch.product_name,
            timestamp_utc(Utc::now())
        ),
    }
}
