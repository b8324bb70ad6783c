//! `IReportStoreStub` — in-memory test double for `IReportStore`.
//!
//! Used by report tests to avoid creating real database files.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::StoreError;
use crate::types::{TabularResult, Value};

use super::store::IReportStore;

/// In-memory stub implementation of `IReportStore`.
///
/// Queries return an empty result unless configured with `set_result` or
/// `set_failure`. Every call is recorded so tests can count round trips.
pub struct IReportStoreStub {
    results: Mutex<HashMap<String, TabularResult>>,
    failures: Mutex<HashMap<String, StoreError>>,
    queries: Mutex<Vec<String>>,
    executed: Mutex<Vec<(String, Vec<Value>)>>,
    next_rowid: Mutex<i64>,
}

impl IReportStoreStub {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
            executed: Mutex::new(Vec::new()),
            next_rowid: Mutex::new(1),
        }
    }

    pub fn set_result(&self, sql: &str, result: TabularResult) {
        self.results.lock().unwrap().insert(sql.to_string(), result);
    }

    pub fn set_failure(&self, sql: &str, error: StoreError) {
        self.failures.lock().unwrap().insert(sql.to_string(), error);
    }

    /// Every SQL string passed to `run_query`, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Every statement passed to `execute`/`insert`, in call order.
    pub fn executed(&self) -> Vec<(String, Vec<Value>)> {
        self.executed.lock().unwrap().clone()
    }

    fn lookup(&self, sql: &str) -> Result<TabularResult, StoreError> {
        self.queries.lock().unwrap().push(sql.to_string());
        if let Some(err) = self.failures.lock().unwrap().get(sql) {
            return Err(err.clone());
        }
        Ok(self
            .results
            .lock()
            .unwrap()
            .get(sql)
            .cloned()
            .unwrap_or_default())
    }
}

impl Default for IReportStoreStub {
    fn default() -> Self {
        Self::new()
    }
}

impl IReportStore for IReportStoreStub {
    fn run_query(&self, sql: &str) -> Result<TabularResult, StoreError> {
        self.lookup(sql)
    }

    fn run_query_with(&self, sql: &str, _params: &[Value]) -> Result<TabularResult, StoreError> {
        self.lookup(sql)
    }

    fn execute(&self, _operation: &str, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        if let Some(err) = self.failures.lock().unwrap().get(sql) {
            return Err(err.clone());
        }
        self.executed
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        Ok(1)
    }

    fn insert(&self, operation: &str, sql: &str, params: &[Value]) -> Result<i64, StoreError> {
        self.execute(operation, sql, params)?;
        let mut next = self.next_rowid.lock().unwrap();
        let id = *next;
        *next += 1;
        Ok(id)
    }

    fn assigns_identity(&self, _table: &str, _column: &str) -> Result<bool, StoreError> {
        Ok(true)
    }
}
