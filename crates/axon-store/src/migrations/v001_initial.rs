//! v001 -- Initial schema creation.
//!
//! Creates the single `kv` table.  The persisted collections are JSON blobs
//! keyed by the fixed strings in [`crate::keys`], so there is no per-entity
//! schema to migrate.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Key/value blobs
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY NOT NULL,   -- fixed storage key, e.g. "axon_users"
    value TEXT NOT NULL                -- JSON-serialized payload
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
