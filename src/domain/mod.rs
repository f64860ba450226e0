//! Domain layer: entities and tree reconstruction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod admissibility;
pub mod custom;
pub mod entities;
pub mod error;
pub mod natural;
pub mod options;
pub mod ordering;
pub mod store;

pub use admissibility::admissibility;
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use natural::LevelsContext;
pub use options::{
    custom_order_levels, custom_order_options, natural_order_levels, natural_order_options,
    resolve_roots,
};
pub use ordering::{by_id, by_id_desc, by_key, by_lft, by_name, SortOrder};
pub use store::NestedSetStore;
