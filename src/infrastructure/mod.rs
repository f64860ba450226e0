//! Infrastructure layer: store implementations and tree file loading
//!
//! This layer implements the storage boundary trait and performs file I/O.

pub mod error;
pub mod loader;
pub mod memory;

pub use error::{InfraError, InfraResult};
pub use loader::{load_store, parse_store};
pub use memory::InMemoryStore;
