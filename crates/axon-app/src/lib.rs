//! # axon-app
//!
//! Application layer of the Axon Admin dashboard: the shared [`state::AppState`]
//! composition root, the command modules that back each screen (auth,
//! messaging, calendar, help tickets, settings, report exports), the contact
//! directory derivation, and the client-side route surface with its
//! authentication gate.
//!
//! Commands follow the managed-state convention: free functions taking the
//! `Arc<Mutex<AppState>>` handle, locking for the duration of the operation.
//! There is no background processing apart from the cancellable simulated
//! message reply.

pub mod commands;
pub mod contacts;
pub mod routes;
pub mod state;

mod error;

pub use error::{AuthError, CalendarError, MessagingError, SettingsError, TicketError};

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.  Call once from the binary or host
/// shell embedding this crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("axon_app=debug,axon_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
