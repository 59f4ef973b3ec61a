//! Drink catalogs: one parameterized store type, instantiated once per
//! category by the registry.

pub mod registry;
pub mod store;

pub use registry::{ActivationReport, CatalogRegistry};
pub use store::CatalogStore;
