use std::sync::Arc;

use configs::CatalogConfig;
use models::{id::IdGenerator, CatalogItem, Category, ItemDraft};
use tracing::debug;

use crate::storage::PersistenceAdapter;
use crate::store::{list_store::ListStore, LoadOutcome, PendingWrite, Subscription};

/// Single source of truth for one catalog's items and their durability.
///
/// Cloning is cheap and every clone shares the same list.
#[derive(Clone)]
pub struct CatalogStore {
    category: Option<Category>,
    list: Arc<ListStore<CatalogItem>>,
    ids: Arc<IdGenerator>,
}

impl CatalogStore {
    /// Store for one of the built-in categories, seeded with its default item.
    pub fn for_category(category: Category, adapter: Arc<dyn PersistenceAdapter>, config: &CatalogConfig) -> Self {
        let mut store = Self::with_seed(category.storage_key(), category.seed(), adapter, config);
        store.category = Some(category);
        store
    }

    /// Store bound to an arbitrary key and seed list.
    pub fn with_seed(
        key: impl Into<String>,
        seed: Vec<CatalogItem>,
        adapter: Arc<dyn PersistenceAdapter>,
        config: &CatalogConfig,
    ) -> Self {
        Self {
            category: None,
            list: ListStore::new(key, seed, adapter, config.on_load_conflict),
            ids: Arc::new(IdGenerator::new(config.id_strategy)),
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn key(&self) -> &str {
        self.list.key()
    }

    /// First activation loads the stored list; later calls are no-ops that
    /// report the first outcome.
    pub async fn activate(&self) -> LoadOutcome {
        self.list.activate().await
    }

    pub fn is_activated(&self) -> bool {
        self.list.is_activated()
    }

    /// Read the stored list now, replacing the in-memory list if it parses.
    pub async fn load(&self) -> LoadOutcome {
        self.list.load().await
    }

    /// Append a new item with a freshly issued id.
    pub fn add(&self, draft: ItemDraft) -> (CatalogItem, PendingWrite) {
        let item = draft.into_item(self.ids.next_id());
        debug!(catalog = %self.key(), id = %item.id, "adding item");
        let appended = item.clone();
        let write = self.list.mutate(move |current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(current);
            next.push(appended.clone());
            next
        });
        (item, write)
    }

    /// Drop every item with `id`. Unknown ids leave the list as is, but the
    /// list is still written back.
    pub fn remove(&self, id: &str) -> PendingWrite {
        debug!(catalog = %self.key(), id, "removing item");
        self.list.mutate(|current| current.iter().filter(|item| item.id != id).cloned().collect())
    }

    /// Replace the item sharing `item.id`, keeping its position. Unknown ids
    /// leave the list as is, but the list is still written back.
    pub fn update(&self, item: CatalogItem) -> PendingWrite {
        debug!(catalog = %self.key(), id = %item.id, "updating item");
        self.list.mutate(|current| {
            current
                .iter()
                .map(|existing| if existing.id == item.id { item.clone() } else { existing.clone() })
                .collect()
        })
    }

    /// Snapshot for rendering; later mutations do not affect it.
    pub fn current_list(&self) -> Arc<Vec<CatalogItem>> {
        self.list.snapshot()
    }

    pub fn get(&self, id: &str) -> Option<CatalogItem> {
        self.list.snapshot().iter().find(|item| item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.list.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.snapshot().is_empty()
    }

    /// Register `listener` to run after every mutation and every load that
    /// replaced the list.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[CatalogItem]) + Send + Sync + 'static,
    {
        self.list.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.list.subscriber_count()
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("key", &self.key())
            .field("items", &self.len())
            .finish()
    }
}
