//! Schema migrations.
//!
//! The applied schema version lives in SQLite's `user_version` pragma; every
//! open runs the modules whose version is still above it, in order, and bumps
//! the pragma after each one.  A given migration therefore executes at most
//! once per database file.

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Version the code expects.  A new migration module bumps this.
const CURRENT_VERSION: u32 = 1;

/// Bring the database up to [`CURRENT_VERSION`].
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let applied: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(applied, target = CURRENT_VERSION, "migration check");

    if applied < 1 {
        tracing::info!("applying migration v001_initial");
        v001_initial::up(conn).map_err(|e| StoreError::Migration(e.to_string()))?;
        conn.pragma_update(None, "user_version", 1)?;
    }

    Ok(())
}
