// src/models/mod.rs

//! Domain models for the stock watcher.

mod config;
mod status;

// Re-export all public types
pub use config::{Config, HttpConfig, NotifyConfig, PathsConfig, WEBHOOK_ENV, WatchConfig};
pub use status::StockStatus;
