//! # foodshare-storage
//!
//! SQLite persistence layer for the Foodshare reporting engine.
//! Every call opens and closes its own connection; each statement is
//! its own atomic unit.

pub mod accessor;
pub mod gateway;
pub mod overview;
pub mod schema;

pub use accessor::SqliteStore;
pub use gateway::{
    Assignments, ClaimField, ClaimGateway, EntityField, FoodListingField, FoodListingGateway,
    NewClaim, NewFoodListing,
};
pub use overview::{dump_table, overview_counts, OverviewCounts};
