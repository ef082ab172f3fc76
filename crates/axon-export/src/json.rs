//! Pretty-printed JSON dumps of raw record collections.

use serde::Serialize;

use crate::error::Result;

/// Render `records` as indented JSON, exactly as held in memory.
pub fn to_json_pretty<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
