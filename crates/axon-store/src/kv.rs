//! Raw JSON key/value access.
//!
//! All persisted state goes through these three methods.  Reads are lenient:
//! a missing key and a corrupt value both come back as `None`, so callers can
//! fall back to defaults instead of failing the whole screen.  Writes replace
//! the stored value wholesale.

use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::Store;

impl Store {
    /// Load and deserialize the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent *or* when the stored JSON no
    /// longer parses as `T`; corruption is logged but deliberately not
    /// surfaced to the caller.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT value FROM kv WHERE key = ?1")?;

        let raw: Option<String> = stmt
            .query_row(params![key], |row| row.get(0))
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed stored value");
                Ok(None)
            }
        }
    }

    /// Serialize `value` and store it under `key`, replacing any previous
    /// value.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, json],
        )?;
        Ok(())
    }

    /// Delete the value stored under `key`.  Returns `true` if a row was
    /// removed; deleting an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}
