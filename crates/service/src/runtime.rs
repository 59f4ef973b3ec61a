//! Runtime bootstrap
//!
//! Turns an `AppConfig` into a ready registry: picks the storage backend,
//! makes sure the data directory exists and activates every store.

use std::sync::Arc;

use configs::{AppConfig, StorageBackend, StorageConfig};
use tracing::info;

use crate::catalog::{ActivationReport, CatalogRegistry};
use crate::errors::StoreError;
use crate::storage::{JsonDirAdapter, MemoryAdapter, PersistenceAdapter};

/// Build the persistence adapter selected by `[storage]`.
pub async fn build_adapter(cfg: &StorageConfig) -> Result<Arc<dyn PersistenceAdapter>, StoreError> {
    match cfg.backend {
        StorageBackend::File => {
            common::env::ensure_data_dir(&cfg.data_dir).await.map_err(StoreError::storage)?;
            info!(backend = "file", data_dir = %cfg.data_dir, "storage ready");
            let adapter: Arc<dyn PersistenceAdapter> = JsonDirAdapter::new(&cfg.data_dir).await?;
            Ok(adapter)
        }
        StorageBackend::Memory => {
            info!(backend = "memory", "storage ready; nothing will survive a restart");
            Ok(Arc::new(MemoryAdapter::new()))
        }
    }
}

/// Build the registry and run each store's one-time load.
pub async fn bootstrap(cfg: &AppConfig) -> Result<(CatalogRegistry, ActivationReport), StoreError> {
    let adapter = build_adapter(&cfg.storage).await?;
    let registry = CatalogRegistry::new(adapter, &cfg.catalog);
    let report = registry.activate_all().await;
    Ok((registry, report))
}
