//! Service layer for the stock watcher.
//!
//! This module contains the business logic for:
//! - Page fetching (`PageFetcher`)
//! - Availability classification (`classifier`)
//! - Webhook notification (`DiscordNotifier`)

pub mod classifier;
mod fetcher;
mod notifier;

pub use fetcher::PageFetcher;
pub use notifier::{DiscordNotifier, Notify};
