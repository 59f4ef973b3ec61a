use std::future::Future;

use tokio::task::JoinHandle;

use crate::errors::StoreError;

/// Background persist issued by a mutation.
///
/// Dropping the handle leaves the write running (fire-and-forget). Awaiting
/// [`PendingWrite::settled`] reports whether the write reached storage; the
/// failure has already been logged either way.
#[derive(Debug)]
pub struct PendingWrite {
    handle: JoinHandle<Result<(), StoreError>>,
}

impl PendingWrite {
    /// Spawn `write` on the ambient Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime: stores must only be used
    /// while the runtime that owns them is active.
    pub(crate) fn spawn<F>(write: F) -> Self
    where
        F: Future<Output = Result<(), StoreError>> + Send + 'static,
    {
        Self { handle: tokio::spawn(write) }
    }

    /// Wait for the write to finish and return its outcome.
    pub async fn settled(self) -> Result<(), StoreError> {
        match self.handle.await {
            Ok(res) => res,
            Err(e) => Err(StoreError::WriteAborted(e.to_string())),
        }
    }
}
