//! Report result cache: Moka in-memory, keyed by exact SQL text.
//!
//! Entries are only dropped by capacity eviction or [`QueryCache::invalidate_all`].
//! Writes through the mutation gateway do not touch the cache, so a cached
//! report stays stale until the owner refreshes it.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::debug;

use foodshare_core::errors::StoreError;
use foodshare_core::types::TabularResult;

pub struct QueryCache {
    inner: Cache<String, Arc<TabularResult>>,
}

impl QueryCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::new(capacity),
        }
    }

    pub fn get(&self, sql: &str) -> Option<Arc<TabularResult>> {
        self.inner.get(sql)
    }

    pub fn insert(&self, sql: &str, result: Arc<TabularResult>) {
        self.inner.insert(sql.to_string(), result);
    }

    /// Cached result for `sql`, or run `load` and cache what it returns.
    /// Failed loads are not cached.
    pub fn get_or_load<F>(&self, sql: &str, load: F) -> Result<Arc<TabularResult>, StoreError>
    where
        F: FnOnce() -> Result<TabularResult, StoreError>,
    {
        if let Some(hit) = self.inner.get(sql) {
            debug!(sql, "report cache hit");
            return Ok(hit);
        }
        let result = Arc::new(load()?);
        self.inner.insert(sql.to_string(), Arc::clone(&result));
        Ok(result)
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(64)
    }
}
