//! Application state shared across all commands.
//!
//! [`AppState`] is the composition root: it owns the store handle, the cached
//! session id, the in-memory collections, and the handles of any scheduled
//! reply tasks.  It is wrapped in `Arc<Mutex<>>` and handed to every command
//! as an explicit dependency; nothing reaches into shared storage ad hoc.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use axon_store::{CalendarEvent, Store, StoreError, Thread, Ticket};

/// Shared handle passed to every command.
pub type SharedState = Arc<Mutex<AppState>>;

/// Delay before the simulated counter-reply fires.
const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(900);

/// Central application state.
pub struct AppState {
    /// Handle to the local database.
    pub store: Store,

    /// Id of the logged-in user, if any.  Always resolved through the
    /// registered-user collection before use; never a denormalised copy.
    pub session: Option<Uuid>,

    /// Global dark-mode flag, mirrored from the store at open.
    pub dark_mode: bool,

    /// Conversation threads, loaded at open and rewritten on every mutation.
    pub threads: Vec<Thread>,

    /// The thread currently open in the messages screen.
    pub active_thread: Option<Uuid>,

    /// Calendar entries, loaded at open and rewritten on every mutation.
    pub events: Vec<CalendarEvent>,

    /// Submitted help tickets.
    pub tickets: Vec<Ticket>,

    /// How long a simulated reply waits before firing.  Shortened in tests.
    pub reply_delay: Duration,

    /// Scheduled reply tasks keyed by thread id, so deleting a thread can
    /// cancel anything still pending against it.
    pub pending_replies: Vec<(Uuid, JoinHandle<()>)>,
}

impl AppState {
    /// Load all persisted collections from `store` and build the state.
    ///
    /// The first thread becomes the open one, and becoming the open thread
    /// always clears its unread counter, on restore as much as on a click.
    pub fn open(store: Store) -> Result<Self, StoreError> {
        let session = store.current_user_id()?;
        let dark_mode = store.dark_mode()?;
        let mut threads = store.load_threads()?;
        let events = store.load_events()?;
        let tickets = store.load_tickets()?;

        let active_thread = threads.first().map(|t| t.id);
        if let Some(first) = threads.first_mut() {
            if first.unread != 0 {
                first.unread = 0;
                store.save_threads(&threads)?;
            }
        }

        Ok(Self {
            store,
            session,
            dark_mode,
            threads,
            active_thread,
            events,
            tickets,
            reply_delay: DEFAULT_REPLY_DELAY,
            pending_replies: Vec::new(),
        })
    }

    /// Convenience wrapper producing the shared handle commands expect.
    pub fn shared(store: Store) -> Result<SharedState, StoreError> {
        Ok(Arc::new(Mutex::new(Self::open(store)?)))
    }
}
