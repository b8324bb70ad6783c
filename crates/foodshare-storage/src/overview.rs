//! Dataset overview: per-table row counts and whole-table dumps.

use serde::Serialize;

use foodshare_core::errors::{StoreError, StoreResult};
use foodshare_core::traits::IReportStore;
use foodshare_core::types::{TabularResult, Table};

/// Row counts of the four entity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OverviewCounts {
    pub providers: i64,
    pub receivers: i64,
    pub food_listings: i64,
    pub claims: i64,
}

pub fn overview_counts(store: &dyn IReportStore) -> StoreResult<OverviewCounts> {
    Ok(OverviewCounts {
        providers: count_rows(store, Table::Providers)?,
        receivers: count_rows(store, Table::Receivers)?,
        food_listings: count_rows(store, Table::FoodListings)?,
        claims: count_rows(store, Table::Claims)?,
    })
}

/// Every row of one table.
pub fn dump_table(store: &dyn IReportStore, table: Table) -> StoreResult<TabularResult> {
    store.run_query(&format!("SELECT * FROM {}", table.name()))
}

fn count_rows(store: &dyn IReportStore, table: Table) -> StoreResult<i64> {
    let result = store.run_query(&format!("SELECT COUNT(*) AS c FROM {}", table.name()))?;
    result
        .get(0, 0)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| StoreError::query("count rows", format!("no count returned for {table}")))
}
