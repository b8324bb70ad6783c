//! Stable error codes surfaced to callers (CLI exit messages, logs).

pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const QUERY_ERROR: &str = "QUERY_ERROR";
pub const CONSTRAINT_VIOLATION: &str = "CONSTRAINT_VIOLATION";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const MISSING_IDENTITY: &str = "MISSING_IDENTITY";
pub const INVALID_FIELD: &str = "INVALID_FIELD";
pub const UNKNOWN_REPORT: &str = "UNKNOWN_REPORT";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";

/// Every error enum in the workspace maps each variant to one of the codes above.
pub trait FoodshareErrorCode {
    fn error_code(&self) -> &'static str;
}
