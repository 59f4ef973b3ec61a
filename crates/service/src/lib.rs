//! Service layer owning the on-device catalogs.
//! - Each catalog is an ordered list mirrored into one storage key.
//! - Mutations apply in memory immediately and persist in the background.
//! - Storage errors are logged and contained; they never reach callers.

pub mod errors;
pub mod storage;
pub mod store;
pub mod catalog;
pub mod recipe_book;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use catalog::{CatalogRegistry, CatalogStore};
pub use errors::StoreError;
pub use recipe_book::RecipeBook;
pub use store::{LoadOutcome, PendingWrite, Subscription};
