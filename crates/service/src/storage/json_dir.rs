use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::errors::StoreError;
use crate::storage::adapter::PersistenceAdapter;

/// File-backed adapter: every key is one `<dir>/<key>.json` file.
///
/// Writes overwrite the file in place. A missing file reads as "never stored".
#[derive(Clone, Debug)]
pub struct JsonDirAdapter {
    dir: PathBuf,
}

impl JsonDirAdapter {
    /// Initialize the adapter rooted at `dir`, creating the directory if missing.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(StoreError::storage)?;
        Ok(Arc::new(Self { dir }))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StoreError::Storage(format!("invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl PersistenceAdapter for JsonDirAdapter {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::storage(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let len = value.len();
        fs::write(&path, value).await.map_err(StoreError::storage)?;
        debug!(key, bytes = len, path = %path.display(), "stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::storage(e)),
        }
    }
}
