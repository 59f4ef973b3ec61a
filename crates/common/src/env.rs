//! Environment/runtime helpers
//!
//! Sanity checks to ensure the on-device data directory exists at startup.

use tracing::{debug, warn};

/// Ensure the data directory exists, creating it if needed.
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(data_dir).await {
        Ok(meta) if meta.is_dir() => {
            debug!(%data_dir, "data directory present");
            Ok(())
        }
        Ok(_) => Err(anyhow::anyhow!("{data_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%data_dir, "data directory missing; creating it");
            tokio::fs::create_dir_all(data_dir)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))
        }
    }
}
