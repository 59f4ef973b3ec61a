use std::sync::Arc;

use arc_swap::ArcSwap;
use configs::LoadConflictPolicy;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, error, info, warn};

use crate::errors::StoreError;
use crate::storage::PersistenceAdapter;
use crate::store::observers::{Observers, Subscription};
use crate::store::pending::PendingWrite;

/// Result of reading a persisted list back into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored under the key; the current list was kept.
    NotFound,
    /// The stored list replaced the in-memory list.
    Replaced { len: usize },
    /// The adapter failed the read. Handled like `NotFound`.
    Unreadable,
    /// The stored value is not a valid list; the current list was kept.
    Corrupt,
    /// The list was mutated while the read was in flight and the local
    /// state won (`keep_local` policy only).
    KeptLocal,
}

impl LoadOutcome {
    pub fn replaced(&self) -> bool {
        matches!(self, LoadOutcome::Replaced { .. })
    }
}

/// One ordered list mirrored into a single storage key.
///
/// The list is swapped wholesale on every change; readers get cheap
/// `Arc` snapshots. Every mutation rewrites the full list in the background.
pub(crate) struct ListStore<T> {
    key: String,
    items: ArcSwap<Vec<T>>,
    adapter: Arc<dyn PersistenceAdapter>,
    on_conflict: LoadConflictPolicy,
    activation: OnceCell<LoadOutcome>,
    writer: Mutex<()>,
    observers: Observers<T>,
}

impl<T> ListStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub(crate) fn new(
        key: impl Into<String>,
        seed: Vec<T>,
        adapter: Arc<dyn PersistenceAdapter>,
        on_conflict: LoadConflictPolicy,
    ) -> Arc<Self> {
        Arc::new(Self {
            key: key.into(),
            items: ArcSwap::from_pointee(seed),
            adapter,
            on_conflict,
            activation: OnceCell::new(),
            writer: Mutex::new(()),
            observers: Observers::new(),
        })
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn snapshot(&self) -> Arc<Vec<T>> {
        self.items.load_full()
    }

    /// Run the initial load once for the lifetime of this store. Later calls
    /// return the first outcome without touching storage.
    pub(crate) async fn activate(self: &Arc<Self>) -> LoadOutcome {
        *self.activation.get_or_init(|| self.load()).await
    }

    pub(crate) fn is_activated(&self) -> bool {
        self.activation.initialized()
    }

    /// Read the stored list and, if it parses, install it in place of the
    /// current list. Never fails: read and parse errors are logged and the
    /// current list is left untouched.
    pub(crate) async fn load(self: &Arc<Self>) -> LoadOutcome {
        let before = self.items.load_full();

        let raw = match self.adapter.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(catalog = %self.key, "nothing stored; keeping current list");
                return LoadOutcome::NotFound;
            }
            Err(e) => {
                warn!(catalog = %self.key, error = %e, "failed to read stored list; keeping current list");
                return LoadOutcome::Unreadable;
            }
        };

        let parsed: Vec<T> = match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!(catalog = %self.key, error = %e, "stored list is corrupt; keeping current list");
                return LoadOutcome::Corrupt;
            }
        };
        let len = parsed.len();

        match self.on_conflict {
            LoadConflictPolicy::Replace => self.items.store(Arc::new(parsed)),
            LoadConflictPolicy::KeepLocal => {
                let prev = self.items.compare_and_swap(&before, Arc::new(parsed));
                if !Arc::ptr_eq(&*prev, &before) {
                    info!(catalog = %self.key, "list changed during load; keeping local edits");
                    // storage still holds the stale list
                    drop(self.persist());
                    return LoadOutcome::KeptLocal;
                }
            }
        }

        info!(catalog = %self.key, items = len, "loaded stored list");
        let current = self.items.load_full();
        self.observers.notify(current.as_slice());
        LoadOutcome::Replaced { len }
    }

    /// Replace the list with `edit(current)`, notify subscribers, then
    /// persist in the background. The in-memory change is visible before
    /// this returns; the write is not awaited.
    pub(crate) fn mutate<F>(self: &Arc<Self>, mut edit: F) -> PendingWrite
    where
        F: FnMut(&[T]) -> Vec<T>,
    {
        self.items.rcu(|current| edit(current.as_slice()));
        let current = self.items.load_full();
        self.observers.notify(current.as_slice());
        self.persist()
    }

    pub(crate) fn persist(self: &Arc<Self>) -> PendingWrite {
        let store = Arc::clone(self);
        PendingWrite::spawn(async move {
            let res = store.write_latest().await;
            if let Err(e) = &res {
                error!(catalog = %store.key, error = %e, "failed to persist list; in-memory state kept");
            }
            res
        })
    }

    /// Writes are serialized; each one stores the newest list at the moment
    /// it gets the writer lock, so the last finished write is never stale.
    async fn write_latest(&self) -> Result<(), StoreError> {
        let _guard = self.writer.lock().await;
        let snapshot = self.items.load_full();
        let body = serde_json::to_string(&*snapshot)?;
        self.adapter.set(&self.key, body).await?;
        debug!(catalog = %self.key, items = snapshot.len(), "persisted list");
        Ok(())
    }

    pub(crate) fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}
