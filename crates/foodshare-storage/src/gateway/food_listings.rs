//! `FoodListingGateway` — insert/update/delete over `Food_Listings`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use foodshare_core::errors::{StoreError, StoreResult};
use foodshare_core::traits::IReportStore;
use foodshare_core::types::{FoodType, MealType, TabularResult, Value};

use super::assignments::{Assignments, EntityField};
use super::{
    ensure_not_blank, require_integer, require_label, require_text, EntityTable, DATE_FORMAT,
};

const ENTITY: &str = "FoodListing";

const TABLE: EntityTable = EntityTable {
    entity: ENTITY,
    table: "Food_Listings",
    id_column: "Food_ID",
};

/// Assignable columns of `Food_Listings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodListingField {
    FoodName,
    Quantity,
    ExpiryDate,
    ProviderId,
    ProviderType,
    Location,
    FoodType,
    MealType,
}

impl EntityField for FoodListingField {
    const ENTITY: &'static str = ENTITY;
    const ALL: &'static [Self] = &[
        Self::FoodName,
        Self::Quantity,
        Self::ExpiryDate,
        Self::ProviderId,
        Self::ProviderType,
        Self::Location,
        Self::FoodType,
        Self::MealType,
    ];

    fn column(self) -> &'static str {
        match self {
            Self::FoodName => "Food_Name",
            Self::Quantity => "Quantity",
            Self::ExpiryDate => "Expiry_Date",
            Self::ProviderId => "Provider_ID",
            Self::ProviderType => "Provider_Type",
            Self::Location => "Location",
            Self::FoodType => "Food_Type",
            Self::MealType => "Meal_Type",
        }
    }

    fn normalize(self, value: Value) -> StoreResult<Value> {
        let column = self.column();
        match self {
            Self::FoodName | Self::ProviderType | Self::Location => {
                require_text(ENTITY, column, value)
            }
            Self::Quantity => {
                let quantity = require_integer(ENTITY, column, value)?;
                if quantity < 0 {
                    return Err(StoreError::invalid_field(ENTITY, column, "must be non-negative"));
                }
                Ok(Value::Integer(quantity))
            }
            Self::ProviderId => require_integer(ENTITY, column, value).map(Value::Integer),
            Self::ExpiryDate => match value {
                Value::Null => Ok(Value::Null),
                Value::Text(ref s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                    .map(|d| Value::Text(d.format(DATE_FORMAT).to_string()))
                    .map_err(|e| StoreError::invalid_field(ENTITY, column, format!("{e}"))),
                other => Err(StoreError::invalid_field(
                    ENTITY,
                    column,
                    format!("expected YYYY-MM-DD, got {other:?}"),
                )),
            },
            Self::FoodType => {
                let labels: Vec<&str> = FoodType::ALL.iter().map(|t| t.as_str()).collect();
                require_label(ENTITY, column, value, FoodType::parse, &labels)
            }
            Self::MealType => {
                let labels: Vec<&str> = MealType::ALL.iter().map(|t| t.as_str()).collect();
                require_label(ENTITY, column, value, MealType::parse, &labels)
            }
        }
    }
}

/// A food listing to insert. Every required column is a non-optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodListing {
    /// Omit to let the store assign one.
    pub food_id: Option<i64>,
    pub food_name: String,
    pub quantity: u32,
    pub expiry_date: Option<NaiveDate>,
    pub provider_id: i64,
    pub provider_type: String,
    pub location: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
}

impl NewFoodListing {
    fn validate(&self) -> StoreResult<()> {
        ensure_not_blank(ENTITY, "Food_Name", &self.food_name)?;
        ensure_not_blank(ENTITY, "Provider_Type", &self.provider_type)?;
        ensure_not_blank(ENTITY, "Location", &self.location)?;
        Ok(())
    }

    fn params(&self) -> Vec<Value> {
        vec![
            Value::from(self.food_id),
            Value::from(self.food_name.trim()),
            Value::from(self.quantity),
            Value::from(self.expiry_date.map(|d| d.format(DATE_FORMAT).to_string())),
            Value::Integer(self.provider_id),
            Value::from(self.provider_type.trim()),
            Value::from(self.location.trim()),
            Value::from(self.food_type.as_str()),
            Value::from(self.meal_type.as_str()),
        ]
    }
}

/// Mutations over `Food_Listings`. Holds the store it was constructed with.
pub struct FoodListingGateway<S: IReportStore> {
    store: S,
}

impl<S: IReportStore> FoodListingGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert a listing and return its `Food_ID`.
    pub fn insert(&self, listing: &NewFoodListing) -> StoreResult<i64> {
        listing.validate()?;
        if listing.food_id.is_none() {
            TABLE.require_identity(&self.store)?;
        }

        let rowid = self.store.insert(
            "insert food listing",
            "INSERT INTO Food_Listings
             (Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type,
              Location, Food_Type, Meal_Type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            &listing.params(),
        )?;
        let food_id = listing.food_id.unwrap_or(rowid);
        info!(food_id, name = %listing.food_name, "food listing inserted");
        Ok(food_id)
    }

    /// Change only the named columns of one listing.
    pub fn update(&self, food_id: i64, assignments: &Assignments<FoodListingField>) -> StoreResult<()> {
        TABLE.update(&self.store, food_id, assignments)
    }

    /// Remove a listing. Deleting a missing id succeeds and returns `false`.
    pub fn delete(&self, food_id: i64) -> StoreResult<bool> {
        TABLE.delete(&self.store, food_id)
    }

    /// The full row for one listing (zero rows if absent).
    pub fn fetch(&self, food_id: i64) -> StoreResult<TabularResult> {
        TABLE.fetch(&self.store, food_id)
    }

    /// `Food_ID`, `Food_Name`, `Quantity` of every listing, for pickers.
    pub fn summaries(&self) -> StoreResult<TabularResult> {
        self.store
            .run_query("SELECT Food_ID, Food_Name, Quantity FROM Food_Listings ORDER BY Food_ID")
    }
}
