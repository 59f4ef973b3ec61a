use crate::errors::StoreError;
use async_trait::async_trait;

/// Durable asynchronous string key-value store backing the catalogs.
///
/// Each persisted list lives under one key as a JSON array. Implementations
/// give no cross-key transactions and no atomicity for partial writes.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Read the value under `key`; `Ok(None)` when nothing was ever stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Overwrite the value under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    /// Delete `key`; returns whether a value existed.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;
}
