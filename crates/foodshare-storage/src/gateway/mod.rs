//! Mutation gateway — validated insert/update/delete for food listings and claims.
//!
//! ## Components
//! - **assignments** — closed per-entity field sets and typed `field = value` lists
//! - **food_listings** — `FoodListingGateway` over `Food_Listings`
//! - **claims** — `ClaimGateway` over `Claims`
//!
//! Column names in generated SQL only ever come from the field enums, never
//! from caller strings. Values are always bound as parameters.

pub mod assignments;
pub mod claims;
pub mod food_listings;

use tracing::{debug, info};

use foodshare_core::errors::{StoreError, StoreResult};
use foodshare_core::traits::IReportStore;
use foodshare_core::types::{TabularResult, Value};

pub use assignments::{Assignments, EntityField};
pub use claims::{ClaimField, ClaimGateway, NewClaim};
pub use food_listings::{FoodListingField, FoodListingGateway, NewFoodListing};

/// Storage format of `Expiry_Date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Storage format of claim `Timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Table coordinates shared by the per-entity gateways.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntityTable {
    pub entity: &'static str,
    pub table: &'static str,
    pub id_column: &'static str,
}

impl EntityTable {
    /// Fail with `MissingIdentity` unless the store fills in the id column.
    pub fn require_identity(&self, store: &dyn IReportStore) -> StoreResult<()> {
        if store.assigns_identity(self.table, self.id_column)? {
            Ok(())
        } else {
            Err(StoreError::MissingIdentity { entity: self.entity })
        }
    }

    pub fn fetch(&self, store: &dyn IReportStore, id: i64) -> StoreResult<TabularResult> {
        store.run_query_with(
            &format!("SELECT * FROM {} WHERE {} = ?1", self.table, self.id_column),
            &[Value::Integer(id)],
        )
    }

    pub fn update<F: EntityField>(
        &self,
        store: &dyn IReportStore,
        id: i64,
        assignments: &Assignments<F>,
    ) -> StoreResult<()> {
        if assignments.is_empty() {
            // Nothing to write, but a missing target is still an error.
            if self.fetch(store, id)?.is_empty() {
                return Err(StoreError::NotFound { entity: self.entity, id });
            }
            return Ok(());
        }

        let (sql, params) = assignments.update_statement(self.table, self.id_column, id)?;
        let operation = format!("update {} {id}", self.entity);
        let changed = store.execute(&operation, &sql, &params)?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: self.entity, id });
        }
        info!(entity = self.entity, id, fields = assignments.len(), "row updated");
        Ok(())
    }

    /// Idempotent delete. Returns whether a row was removed.
    pub fn delete(&self, store: &dyn IReportStore, id: i64) -> StoreResult<bool> {
        let operation = format!("delete {} {id}", self.entity);
        let removed = store.execute(
            &operation,
            &format!("DELETE FROM {} WHERE {} = ?1", self.table, self.id_column),
            &[Value::Integer(id)],
        )?;
        if removed == 0 {
            debug!(entity = self.entity, id, "delete matched no row");
        } else {
            info!(entity = self.entity, id, "row deleted");
        }
        Ok(removed > 0)
    }
}

// ─── Value coercion shared by the field enums ───────────────────────

pub(crate) fn require_text(entity: &'static str, field: &str, value: Value) -> StoreResult<Value> {
    match value {
        Value::Text(s) if !s.trim().is_empty() => Ok(Value::Text(s)),
        Value::Text(_) => Err(StoreError::invalid_field(entity, field, "must not be blank")),
        other => Err(StoreError::invalid_field(
            entity,
            field,
            format!("expected text, got {other:?}"),
        )),
    }
}

/// Integers arrive either typed or as text from form/CLI input.
pub(crate) fn require_integer(entity: &'static str, field: &str, value: Value) -> StoreResult<i64> {
    let parsed = match &value {
        Value::Text(s) => s.trim().parse::<i64>().ok(),
        other => other.as_i64(),
    };
    parsed.ok_or_else(|| {
        StoreError::invalid_field(entity, field, format!("expected integer, got {value:?}"))
    })
}

pub(crate) fn require_label<T>(
    entity: &'static str,
    field: &str,
    value: Value,
    parse: fn(&str) -> Option<T>,
    allowed: &[&str],
) -> StoreResult<Value> {
    match value.as_str().and_then(parse) {
        Some(_) => Ok(value),
        None => Err(StoreError::invalid_field(
            entity,
            field,
            format!("expected one of {}, got {value:?}", allowed.join("/")),
        )),
    }
}

pub(crate) fn ensure_not_blank(entity: &'static str, field: &str, text: &str) -> StoreResult<()> {
    if text.trim().is_empty() {
        return Err(StoreError::invalid_field(entity, field, "must not be blank"));
    }
    Ok(())
}
