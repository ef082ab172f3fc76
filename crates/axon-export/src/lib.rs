//! # axon-export
//!
//! One-way string builders for the report/download formats the dashboard
//! produces: CSV (Excel-friendly, BOM-prefixed), pretty-printed JSON dumps,
//! and a minimal ICS rendition of the work calendar.
//!
//! Nothing here reads these formats back; exports are write-only.

pub mod csv;
pub mod ics;
pub mod json;

mod error;

pub use error::ExportError;
