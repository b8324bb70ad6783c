//! Table bootstrap for the four entity tables.
//! Uses PRAGMA user_version tracking; there is one schema version.

use rusqlite::Connection;

/// Schema version written to `PRAGMA user_version` on first initialization.
pub const SCHEMA_VERSION: u32 = 1;

/// Entity tables. Column names match the source dataset exactly; the
/// report catalog depends on them. No foreign keys: claims may reference
/// listings or receivers that no longer exist.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Providers (
    Provider_ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Type TEXT NOT NULL,
    City TEXT NOT NULL,
    Contact TEXT
);

CREATE TABLE IF NOT EXISTS Receivers (
    Receiver_ID INTEGER PRIMARY KEY,
    Name TEXT NOT NULL,
    Type TEXT NOT NULL,
    City TEXT NOT NULL,
    Contact TEXT
);

CREATE TABLE IF NOT EXISTS Food_Listings (
    Food_ID INTEGER PRIMARY KEY,
    Food_Name TEXT NOT NULL,
    Quantity INTEGER NOT NULL CHECK (Quantity >= 0),
    Expiry_Date TEXT,
    Provider_ID INTEGER NOT NULL,
    Provider_Type TEXT NOT NULL,
    Location TEXT NOT NULL,
    Food_Type TEXT NOT NULL,
    Meal_Type TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_food_listings_provider ON Food_Listings(Provider_ID);

CREATE TABLE IF NOT EXISTS Claims (
    Claim_ID INTEGER PRIMARY KEY,
    Food_ID INTEGER NOT NULL,
    Receiver_ID INTEGER NOT NULL,
    Status TEXT NOT NULL,
    Timestamp TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_claims_food ON Claims(Food_ID);
CREATE INDEX IF NOT EXISTS idx_claims_receiver ON Claims(Receiver_ID);
"#;

/// Create missing tables and stamp the schema version. Idempotent:
/// existing tables and rows are left untouched.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<u32> {
    conn.execute_batch(SCHEMA_SQL)?;
    let version = get_schema_version(conn)?;
    if version == 0 {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        return Ok(SCHEMA_VERSION);
    }
    Ok(version)
}

/// Get the current schema version via PRAGMA user_version.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}
