//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the store boundary trait but are themselves concrete
//! structs, not traits.

mod options;

pub use options::{render_forest, OptionsService};
