//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic against a store and the loaded settings.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::OptionsService;
