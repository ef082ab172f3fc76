//! Fixed storage keys.
//!
//! These names are the app's informal on-disk format; they are carried over
//! verbatim from the browser build so an exported blob stays recognisable.

/// Registered-user collection (JSON array of [`crate::models::User`]).
pub const USERS: &str = "axon_users";

/// Id of the currently logged-in user (JSON-encoded UUID).
///
/// Only the id is stored; readers resolve it through the registered-user
/// collection, so a mutated registry can never leave a stale session copy
/// behind.
pub const CURRENT_USER: &str = "axon_current_user";

/// Message-thread collection (JSON array of [`crate::models::Thread`]).
pub const THREADS: &str = "axon_msgs_threads";

/// Calendar-event collection (JSON array of [`crate::models::CalendarEvent`]).
pub const CALENDAR_EVENTS: &str = "axon_calendar_events";

/// Help-ticket collection (JSON array of [`crate::models::Ticket`]).
pub const TICKETS: &str = "axon_tickets";

/// Global dark-mode flag (JSON boolean).
pub const DARK_MODE: &str = "darkMode";
