use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::StoreError;
use crate::storage::adapter::PersistenceAdapter;

/// Process-local adapter. Used by tests and by the `memory` backend.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    entries: DashMap<String, String>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if a previous session had written it.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw stored value, bypassing the async interface.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryAdapter {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_adapter_get_set_remove() -> Result<(), anyhow::Error> {
        let adapter = MemoryAdapter::new().with_entry("a", "[]");
        assert_eq!(adapter.get("a").await?.as_deref(), Some("[]"));
        assert_eq!(adapter.get("missing").await?, None);

        adapter.set("b", "[1]".into()).await?;
        assert_eq!(adapter.len(), 2);

        assert!(adapter.remove("a").await?);
        assert!(!adapter.remove("a").await?);
        assert_eq!(adapter.raw("b").as_deref(), Some("[1]"));
        Ok(())
    }
}
