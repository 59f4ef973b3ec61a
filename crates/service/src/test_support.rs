#![cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::errors::StoreError;
use crate::storage::{MemoryAdapter, PersistenceAdapter};

/// Adapter whose reads block until `release` is called, so a test can act
/// inside the window between issuing a load and its resolution.
///
/// The value is captured when `get` is issued; writes landing while the read
/// is parked do not leak into its result.
pub struct GatedAdapter {
    inner: MemoryAdapter,
    read_started: Notify,
    gate: Notify,
}

impl GatedAdapter {
    pub fn new(inner: MemoryAdapter) -> Self {
        Self { inner, read_started: Notify::new(), gate: Notify::new() }
    }

    pub fn inner(&self) -> &MemoryAdapter {
        &self.inner
    }

    /// Resolves once a `get` is parked on the gate.
    pub async fn wait_for_read(&self) {
        self.read_started.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl PersistenceAdapter for GatedAdapter {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let issued = self.inner.get(key).await;
        self.read_started.notify_one();
        self.gate.notified().await;
        issued
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        self.inner.remove(key).await
    }
}

/// Adapter that fails reads and/or writes on demand.
#[derive(Default)]
pub struct FlakyAdapter {
    inner: MemoryAdapter,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &MemoryAdapter {
        &self.inner
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PersistenceAdapter for FlakyAdapter {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("read refused".into()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("write refused".into()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        self.inner.remove(key).await
    }
}

mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn gated_read_returns_value_seen_when_issued() -> Result<(), anyhow::Error> {
        let gated = Arc::new(GatedAdapter::new(MemoryAdapter::new().with_entry("k", "old")));
        let reading = tokio::spawn({
            let gated = Arc::clone(&gated);
            async move { gated.get("k").await }
        });
        gated.wait_for_read().await;

        gated.set("k", "new".into()).await?;
        gated.release();

        assert_eq!(reading.await??.as_deref(), Some("old"));
        assert_eq!(gated.inner().raw("k").as_deref(), Some("new"));
        Ok(())
    }
}
