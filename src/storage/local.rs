//! Local filesystem status store.
//!
//! Persists the status token as a single plain-text UTF-8 file with no
//! delimiter. Writes go to a temp file first and are renamed into
//! place, so a reader never sees a torn token.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::StockStatus;
use crate::storage::StatusStore;

/// File-backed status store.
#[derive(Clone)]
pub struct FileStatusStore {
    path: PathBuf,
}

impl FileStatusStore {
    /// Create a store persisting to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the raw token, returning None if the file doesn't exist.
    async fn read_token(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl StatusStore for FileStatusStore {
    async fn load(&self) -> Result<Option<StockStatus>> {
        let Some(token) = self.read_token().await? else {
            return Ok(None);
        };

        let status = StockStatus::from_token(&token);
        if status.is_none() && !token.trim().is_empty() {
            log::warn!(
                "Unrecognized status token {:?} in {:?}; treating as no prior status",
                token.trim(),
                self.path
            );
        }
        Ok(status)
    }

    async fn save(&self, status: StockStatus) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(status.as_token().as_bytes()).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStatusStore::new(tmp.path().join("last_status.txt"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("last_status.txt");
        let store = FileStatusStore::new(&path);

        store.save(StockStatus::InStock).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(StockStatus::InStock));

        // The exact token, no trailing whitespace
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "IN STOCK");
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_token() {
        let tmp = TempDir::new().unwrap();
        let store = FileStatusStore::new(tmp.path().join("last_status.txt"));

        store.save(StockStatus::InStock).await.unwrap();
        store.save(StockStatus::OutOfStock).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(StockStatus::OutOfStock));
    }

    #[tokio::test]
    async fn test_load_tolerates_whitespace() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("last_status.txt");
        tokio::fs::write(&path, "OUT OF STOCK\n").await.unwrap();

        let store = FileStatusStore::new(&path);
        assert_eq!(store.load().await.unwrap(), Some(StockStatus::OutOfStock));
    }

    #[tokio::test]
    async fn test_load_unrecognized_token_is_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("last_status.txt");
        tokio::fs::write(&path, "PROBABLY").await.unwrap();

        let store = FileStatusStore::new(&path);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("state/last_status.txt");
        let store = FileStatusStore::new(&path);

        store.save(StockStatus::InStock).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(StockStatus::InStock));
    }
}
