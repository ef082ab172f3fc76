//! # axon-store
//!
//! Local persistence for the Axon Admin application.
//!
//! Everything the app keeps across restarts lives in a single `kv` table: a
//! string key mapped to a JSON blob, mirroring the browser-local storage the
//! dashboard was originally built on.  The crate exposes a synchronous
//! [`Store`] handle that wraps a `rusqlite::Connection` and provides typed
//! load/save helpers for every persisted collection (registered users, the
//! current session, message threads, calendar events, help tickets and the
//! dark-mode flag).
//!
//! Collections are rewritten wholesale on every mutation; readers tolerate
//! absent or malformed JSON by falling back to an empty/default value.

pub mod calendar;
pub mod keys;
pub mod kv;
pub mod migrations;
pub mod models;
pub mod settings;
pub mod store;
pub mod threads;
pub mod tickets;
pub mod users;

mod error;

pub use error::StoreError;
pub use models::*;
pub use store::Store;
