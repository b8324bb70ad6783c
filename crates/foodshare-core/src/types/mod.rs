//! Shared data types: cell values, tabular results, entity enums.

pub mod entities;
pub mod tabular;
pub mod value;

pub use entities::{ClaimStatus, FoodType, MealType, Table};
pub use tabular::TabularResult;
pub use value::Value;
