//! Shared runtime helpers: logging setup and environment checks used by
//! the catalog binary and the service bootstrap.

pub mod env;
pub mod utils;
