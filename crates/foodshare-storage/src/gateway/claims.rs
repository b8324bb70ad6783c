//! `ClaimGateway` — insert/update/delete over `Claims`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use foodshare_core::errors::{StoreError, StoreResult};
use foodshare_core::traits::IReportStore;
use foodshare_core::types::{ClaimStatus, TabularResult, Value};

use super::assignments::{Assignments, EntityField};
use super::{require_integer, require_label, EntityTable, TIMESTAMP_FORMAT};

const ENTITY: &str = "Claim";

const TABLE: EntityTable = EntityTable {
    entity: ENTITY,
    table: "Claims",
    id_column: "Claim_ID",
};

/// Timestamps are also accepted in ISO `T`-separated form and stored
/// in [`TIMESTAMP_FORMAT`].
const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Assignable columns of `Claims`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    FoodId,
    ReceiverId,
    Status,
    Timestamp,
}

impl EntityField for ClaimField {
    const ENTITY: &'static str = ENTITY;
    const ALL: &'static [Self] = &[Self::FoodId, Self::ReceiverId, Self::Status, Self::Timestamp];

    fn column(self) -> &'static str {
        match self {
            Self::FoodId => "Food_ID",
            Self::ReceiverId => "Receiver_ID",
            Self::Status => "Status",
            Self::Timestamp => "Timestamp",
        }
    }

    fn normalize(self, value: Value) -> StoreResult<Value> {
        let column = self.column();
        match self {
            Self::FoodId | Self::ReceiverId => {
                require_integer(ENTITY, column, value).map(Value::Integer)
            }
            Self::Status => {
                let labels: Vec<&str> = ClaimStatus::ALL.iter().map(|s| s.as_str()).collect();
                require_label(ENTITY, column, value, ClaimStatus::parse, &labels)
            }
            Self::Timestamp => {
                let parsed = value.as_str().and_then(|s| {
                    let s = s.trim();
                    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
                        .or_else(|_| NaiveDateTime::parse_from_str(s, ISO_TIMESTAMP_FORMAT))
                        .ok()
                });
                match parsed {
                    Some(ts) => Ok(Value::Text(ts.format(TIMESTAMP_FORMAT).to_string())),
                    None => Err(StoreError::invalid_field(
                        ENTITY,
                        column,
                        format!("expected YYYY-MM-DD HH:MM:SS, got {value:?}"),
                    )),
                }
            }
        }
    }
}

/// A claim to insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClaim {
    /// Omit to let the store assign one.
    pub claim_id: Option<i64>,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
    pub timestamp: NaiveDateTime,
}

/// Mutations over `Claims`. Referenced listings and receivers are not
/// checked for existence.
pub struct ClaimGateway<S: IReportStore> {
    store: S,
}

impl<S: IReportStore> ClaimGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert a claim and return its `Claim_ID`.
    pub fn insert(&self, claim: &NewClaim) -> StoreResult<i64> {
        if claim.claim_id.is_none() {
            TABLE.require_identity(&self.store)?;
        }

        let rowid = self.store.insert(
            "insert claim",
            "INSERT INTO Claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            &[
                Value::from(claim.claim_id),
                Value::Integer(claim.food_id),
                Value::Integer(claim.receiver_id),
                Value::from(claim.status.as_str()),
                Value::Text(claim.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            ],
        )?;
        let claim_id = claim.claim_id.unwrap_or(rowid);
        info!(claim_id, status = %claim.status, "claim inserted");
        Ok(claim_id)
    }

    /// Change only the named columns of one claim.
    pub fn update(&self, claim_id: i64, assignments: &Assignments<ClaimField>) -> StoreResult<()> {
        TABLE.update(&self.store, claim_id, assignments)
    }

    /// Remove a claim. Deleting a missing id succeeds and returns `false`.
    pub fn delete(&self, claim_id: i64) -> StoreResult<bool> {
        TABLE.delete(&self.store, claim_id)
    }

    /// The full row for one claim (zero rows if absent).
    pub fn fetch(&self, claim_id: i64) -> StoreResult<TabularResult> {
        TABLE.fetch(&self.store, claim_id)
    }

    /// `Claim_ID`, `Food_ID`, `Receiver_ID`, `Status` of every claim, for pickers.
    pub fn summaries(&self) -> StoreResult<TabularResult> {
        self.store
            .run_query("SELECT Claim_ID, Food_ID, Receiver_ID, Status FROM Claims ORDER BY Claim_ID")
    }
}
