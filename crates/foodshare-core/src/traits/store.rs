//! `IReportStore` trait — the data store accessor contract.
//!
//! Reports and the mutation gateway only ever talk to the store through
//! this trait. The SQLite implementation lives in `foodshare-storage`.

use std::sync::Arc;

use crate::errors::StoreError;
use crate::types::{TabularResult, Value};

/// Read and write access to the relational store.
///
/// Each call is its own atomic unit: implementations must not hold a
/// transaction open across calls.
pub trait IReportStore: Send + Sync {
    /// Run a read statement and return every row.
    fn run_query(&self, sql: &str) -> Result<TabularResult, StoreError>;

    /// Run a parameterized read statement.
    fn run_query_with(&self, sql: &str, params: &[Value]) -> Result<TabularResult, StoreError>;

    /// Run a mutation and return the number of affected rows.
    fn execute(&self, operation: &str, sql: &str, params: &[Value]) -> Result<usize, StoreError>;

    /// Run an INSERT and return the rowid of the new row.
    fn insert(&self, operation: &str, sql: &str, params: &[Value]) -> Result<i64, StoreError>;

    /// Whether `column` of `table` is filled in by the store when omitted.
    fn assigns_identity(&self, table: &str, column: &str) -> Result<bool, StoreError>;
}

// ─── Arc / reference blanket impls ──────────────────────────────────

impl<T: IReportStore + ?Sized> IReportStore for Arc<T> {
    fn run_query(&self, sql: &str) -> Result<TabularResult, StoreError> {
        (**self).run_query(sql)
    }
    fn run_query_with(&self, sql: &str, params: &[Value]) -> Result<TabularResult, StoreError> {
        (**self).run_query_with(sql, params)
    }
    fn execute(&self, operation: &str, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        (**self).execute(operation, sql, params)
    }
    fn insert(&self, operation: &str, sql: &str, params: &[Value]) -> Result<i64, StoreError> {
        (**self).insert(operation, sql, params)
    }
    fn assigns_identity(&self, table: &str, column: &str) -> Result<bool, StoreError> {
        (**self).assigns_identity(table, column)
    }
}

impl<T: IReportStore + ?Sized> IReportStore for &T {
    fn run_query(&self, sql: &str) -> Result<TabularResult, StoreError> {
        (**self).run_query(sql)
    }
    fn run_query_with(&self, sql: &str, params: &[Value]) -> Result<TabularResult, StoreError> {
        (**self).run_query_with(sql, params)
    }
    fn execute(&self, operation: &str, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        (**self).execute(operation, sql, params)
    }
    fn insert(&self, operation: &str, sql: &str, params: &[Value]) -> Result<i64, StoreError> {
        (**self).insert(operation, sql, params)
    }
    fn assigns_identity(&self, table: &str, column: &str) -> Result<bool, StoreError> {
        (**self).assigns_identity(table, column)
    }
}
