//! Status persistence across runs.
//!
//! The watcher keeps exactly one piece of state between invocations:
//! the last known status token. Detecting a transition is a string
//! equality check against this value on the next run.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::StockStatus;

// Re-export for convenience
pub use local::FileStatusStore;

/// Trait for status persistence backends.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Load the last persisted status.
    ///
    /// Returns `None` when no prior record exists; that is not an error.
    async fn load(&self) -> Result<Option<StockStatus>>;

    /// Persist the status token, fully replacing prior content.
    ///
    /// A subsequent `load` must never observe a partial write.
    async fn save(&self, status: StockStatus) -> Result<()>;
}
