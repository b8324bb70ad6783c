//! # foodshare-core
//!
//! Foundation crate for the Foodshare reporting engine.
//! Defines the shared value and entity types, the store trait, errors,
//! config, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FoodshareConfig;
pub use errors::error_code::FoodshareErrorCode;
pub use errors::{ConfigError, StoreError};
pub use traits::IReportStore;
pub use types::tabular::TabularResult;
pub use types::value::Value;
