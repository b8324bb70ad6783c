//! Shared traits used across Foodshare crates.

pub mod store;
pub mod test_helpers;

pub use store::IReportStore;
pub use test_helpers::IReportStoreStub;
