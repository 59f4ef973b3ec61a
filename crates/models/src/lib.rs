//! Domain types for the drink catalogs and recipe notes.

pub mod errors;
pub mod item;
pub mod category;
pub mod recipe;
pub mod id;

pub use category::Category;
pub use item::{CatalogItem, ItemDraft};
pub use recipe::{Recipe, RecipeDraft};
