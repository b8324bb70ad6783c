//! `SqliteStore` — concrete `IReportStore` implementation backed by SQLite.
//!
//! Holds only the database path. Every operation opens its own connection
//! and drops it before returning: no pooling, no transaction spanning
//! more than one statement.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection, ErrorCode, OpenFlags};
use tracing::{debug, info};

use foodshare_core::config::StoreConfig;
use foodshare_core::errors::StoreError;
use foodshare_core::traits::IReportStore;
use foodshare_core::types::{TabularResult, Value};

use crate::schema::initialize_schema;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Connection-per-call SQLite store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteStore {
    /// Create a store for the given database file.
    /// Does NOT open or create the file — call `initialize()` for that.
    pub fn new(db_path: &Path) -> Self {
        Self {
            db_path: db_path.to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.effective_path())
            .with_busy_timeout(Duration::from_millis(config.effective_busy_timeout_ms()))
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Create the database file (and parent directory) if needed and make
    /// sure the four tables exist. Idempotent. Returns the schema version.
    pub fn initialize(&self) -> Result<u32, StoreError> {
        const OP: &str = "initialize store";
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::unavailable(OP, e))?;
            }
        }
        let conn = Connection::open(&self.db_path).map_err(|e| StoreError::unavailable(OP, e))?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| classify(OP, e))?;
        let version = initialize_schema(&conn).map_err(|e| classify(OP, e))?;
        info!(path = %self.db_path.display(), schema_version = version, "store initialized");
        Ok(version)
    }

    /// Open a read-write connection to an existing database.
    /// Never creates the file: a missing database is `StoreUnavailable`.
    fn open(&self, operation: &str) -> Result<Connection, StoreError> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            StoreError::unavailable(
                operation,
                format!("{}: {e}", self.db_path.display()),
            )
        })?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| StoreError::unavailable(operation, e))?;
        Ok(conn)
    }

    fn query(&self, operation: &str, sql: &str, params: &[Value]) -> Result<TabularResult, StoreError> {
        let conn = self.open(operation)?;
        debug!(operation, sql, params = params.len(), "query");

        let mut stmt = conn.prepare(sql).map_err(|e| classify(operation, e))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt
            .query(params_from_iter(params.iter().map(to_sql_value)))
            .map_err(|e| classify(operation, e))?;

        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(|e| classify(operation, e))? {
            let mut values = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                let cell = row.get_ref(i).map_err(|e| classify(operation, e))?;
                values.push(from_value_ref(cell));
            }
            result.push(values);
        }
        Ok(TabularResult::new(columns, result))
    }
}

impl IReportStore for SqliteStore {
    fn run_query(&self, sql: &str) -> Result<TabularResult, StoreError> {
        self.query("run query", sql, &[])
    }

    fn run_query_with(&self, sql: &str, params: &[Value]) -> Result<TabularResult, StoreError> {
        self.query("run query", sql, params)
    }

    fn execute(&self, operation: &str, sql: &str, params: &[Value]) -> Result<usize, StoreError> {
        let conn = self.open(operation)?;
        debug!(operation, sql, params = params.len(), "execute");
        conn.execute(sql, params_from_iter(params.iter().map(to_sql_value)))
            .map_err(|e| classify(operation, e))
    }

    fn insert(&self, operation: &str, sql: &str, params: &[Value]) -> Result<i64, StoreError> {
        let conn = self.open(operation)?;
        debug!(operation, sql, params = params.len(), "insert");
        conn.execute(sql, params_from_iter(params.iter().map(to_sql_value)))
            .map_err(|e| classify(operation, e))?;
        Ok(conn.last_insert_rowid())
    }

    fn assigns_identity(&self, table: &str, column: &str) -> Result<bool, StoreError> {
        const OP: &str = "inspect schema";
        let conn = self.open(OP)?;
        let mut stmt = conn
            .prepare("SELECT name, type, pk FROM pragma_table_info(?1)")
            .map_err(|e| classify(OP, e))?;
        let columns = stmt
            .query_map([table], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })
            .map_err(|e| classify(OP, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| classify(OP, e))?;

        if columns.is_empty() {
            return Err(StoreError::query(OP, format!("no such table: {table}")));
        }

        // Only a single-column INTEGER PRIMARY KEY aliases the rowid.
        let pk: Vec<_> = columns.iter().filter(|(_, _, pk)| *pk > 0).collect();
        Ok(matches!(
            pk.as_slice(),
            [(name, ty, _)] if name.eq_ignore_ascii_case(column) && ty.eq_ignore_ascii_case("INTEGER")
        ))
    }
}

/// Map a driver error onto the store taxonomy.
fn classify(operation: &str, e: rusqlite::Error) -> StoreError {
    let code = match &e {
        rusqlite::Error::SqliteFailure(err, _) => Some(err.code),
        _ => None,
    };
    match code {
        Some(ErrorCode::ConstraintViolation) => StoreError::constraint(operation, e),
        Some(
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::ReadOnly
            | ErrorCode::SystemIoFailure
            | ErrorCode::DatabaseCorrupt,
        ) => StoreError::unavailable(operation, e),
        _ => StoreError::query(operation, e),
    }
}

fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(i) => SqlValue::Integer(*i),
        Value::Real(f) => SqlValue::Real(*f),
        Value::Text(s) => SqlValue::Text(s.clone()),
    }
}

fn from_value_ref(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
