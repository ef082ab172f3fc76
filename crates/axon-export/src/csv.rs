//! CSV rendering of arbitrary record collections.
//!
//! The header row is the union of keys across all records, in first-seen
//! order.  Every cell is double-quoted with embedded quotes doubled, and the
//! whole document is prefixed with a UTF-8 BOM so Excel opens it correctly.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ExportError, Result};

/// UTF-8 byte-order mark expected by Excel.
const BOM: char = '\u{feff}';

/// Render `records` as CSV.
///
/// Each record must serialize to a JSON object.  An empty slice yields just
/// the BOM, matching the original export behaviour.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String> {
    let rows = records
        .iter()
        .map(|r| match serde_json::to_value(r)? {
            Value::Object(map) => Ok(map),
            _ => Err(ExportError::NotTabular),
        })
        .collect::<Result<Vec<_>>>()?;

    if rows.is_empty() {
        return Ok(BOM.to_string());
    }

    // Union of keys across all rows, first-seen order.
    let mut keys: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.clone());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(keys.join(","));
    for row in &rows {
        let cells: Vec<String> = keys
            .iter()
            .map(|k| escape(row.get(k).unwrap_or(&Value::Null)))
            .collect();
        lines.push(cells.join(","));
    }

    Ok(format!("{BOM}{}", lines.join("\n")))
}

/// Render a single value as a quoted CSV cell.
fn escape(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Numbers, booleans, and nested structures render as compact JSON.
        other => other.to_string(),
    };
    format!("\"{}\"", text.replace('"', "\"\""))
}
