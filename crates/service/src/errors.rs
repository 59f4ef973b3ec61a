use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("write aborted: {0}")]
    WriteAborted(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl StoreError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }
}
