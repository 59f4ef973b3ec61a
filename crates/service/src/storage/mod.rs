//! Persistence adapters for the service layer
//!
//! The stores only speak the `PersistenceAdapter` get/set contract; the
//! backends here are a JSON-file-per-key directory and an in-process map.

pub mod adapter;
pub mod json_dir;
pub mod memory;

pub use adapter::PersistenceAdapter;
pub use json_dir::JsonDirAdapter;
pub use memory::MemoryAdapter;
