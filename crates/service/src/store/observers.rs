use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Weak,
};

use dashmap::DashMap;

type Listener<T> = Arc<dyn Fn(&[T]) + Send + Sync>;
type ListenerMap<T> = DashMap<u64, Listener<T>>;

/// Callbacks registered against one list.
pub(crate) struct Observers<T> {
    next_id: AtomicU64,
    listeners: Arc<ListenerMap<T>>,
}

impl<T: 'static> Observers<T> {
    pub(crate) fn new() -> Self {
        Self { next_id: AtomicU64::new(0), listeners: Arc::new(DashMap::new()) }
    }

    pub(crate) fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(id, Arc::new(listener));
        let registry: Weak<ListenerMap<T>> = Arc::downgrade(&self.listeners);
        Subscription {
            id,
            cancel: Some(Box::new(move || {
                if let Some(map) = registry.upgrade() {
                    map.remove(&id);
                }
            })),
        }
    }

    /// Invoke every listener with `items`. Listeners are collected first so
    /// none of the map's shard locks are held while user code runs.
    pub(crate) fn notify(&self, items: &[T]) {
        let listeners: Vec<Listener<T>> = self.listeners.iter().map(|e| Arc::clone(e.value())).collect();
        for listener in listeners {
            listener(items);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Handle returned by `subscribe`; the callback is unregistered when this is
/// dropped or [`Subscription::unsubscribe`] is called.
pub struct Subscription {
    id: u64,
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
