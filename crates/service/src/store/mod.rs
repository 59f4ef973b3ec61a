//! Shared machinery behind every persisted list: load-once activation,
//! wholesale in-memory replacement, background full-list persistence and
//! change notification.

pub(crate) mod list_store;
pub mod observers;
pub mod pending;

pub use list_store::LoadOutcome;
pub use observers::Subscription;
pub use pending::PendingWrite;
