//! Error types for the Foodshare engine.
//! One enum per subsystem, each mapped to a stable string code.

pub mod config_error;
pub mod error_code;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::FoodshareErrorCode;
pub use store_error::{StoreError, StoreResult};
