//! Conversation threads.
//!
//! All operations run synchronously against the in-memory thread list and
//! rewrite the whole persisted collection afterwards.  The only deferred
//! work is the simulated counter-reply: a tokio task per outgoing message,
//! tracked by thread id so deleting the thread cancels anything still
//! pending against it.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use axon_store::models::{Attachment, Message, Participant, Thread};

use crate::contacts::Contact;
use crate::error::MessagingError;
use crate::state::{AppState, SharedState};

/// Canned text of the simulated reply.
const REPLY_TEXT: &str = "Đã nhận 👌";

/// A thread as shown in the conversation list.
#[derive(Debug, Clone)]
pub struct ThreadCard {
    pub id: Uuid,
    pub contact: Contact,
    pub last_text: String,
    pub last_at: Option<DateTime<Utc>>,
    pub pinned: bool,
    pub muted: bool,
    pub unread: u32,
}

/// Open (or create) the conversation with `contact_id` and make it active.
///
/// There is at most one thread per contact: an existing thread is reused, a
/// new one is prepended to the collection.  Returns the thread id.
pub fn open_thread_with(state: &SharedState, contact_id: &str) -> Result<Uuid, MessagingError> {
    let mut guard = state.lock().map_err(|_| MessagingError::Lock)?;

    if let Some(existing) = guard.threads.iter().find(|t| t.includes_contact(contact_id)) {
        let id = existing.id;
        guard.active_thread = Some(id);
        set_unread(&mut guard, id, 0)?;
        return Ok(id);
    }

    let thread = Thread::with_contact(contact_id);
    let id = thread.id;
    guard.threads.insert(0, thread);
    guard.active_thread = Some(id);
    guard.store.save_threads(&guard.threads)?;

    info!(thread = %id, contact = contact_id, "conversation created");
    Ok(id)
}

/// Make `thread_id` the open conversation, clearing its unread counter.
pub fn set_active_thread(state: &SharedState, thread_id: Uuid) -> Result<(), MessagingError> {
    let mut guard = state.lock().map_err(|_| MessagingError::Lock)?;

    if !guard.threads.iter().any(|t| t.id == thread_id) {
        return Err(MessagingError::ThreadNotFound);
    }
    guard.active_thread = Some(thread_id);
    set_unread(&mut guard, thread_id, 0)
}

/// The currently open conversation, if any.
pub fn active_thread(state: &SharedState) -> Result<Option<Thread>, MessagingError> {
    let guard = state.lock().map_err(|_| MessagingError::Lock)?;
    Ok(guard
        .active_thread
        .and_then(|id| guard.threads.iter().find(|t| t.id == id).cloned()))
}

/// Append an outgoing message to the active thread and schedule the
/// simulated reply.
///
/// A blank text with no attachments is a no-op (`Ok(None)`), matching the
/// disabled send button at the UI boundary.
///
/// The reply is spawned on the ambient tokio runtime; callers must invoke
/// this from within one, or the spawn panics.
pub fn send_message(
    state: &SharedState,
    text: &str,
    attachments: Vec<Attachment>,
) -> Result<Option<Message>, MessagingError> {
    let mut guard = state.lock().map_err(|_| MessagingError::Lock)?;

    let thread_id = guard.active_thread.ok_or(MessagingError::NoActiveThread)?;

    let text = text.trim();
    if text.is_empty() && attachments.is_empty() {
        return Ok(None);
    }

    let thread = guard
        .threads
        .iter_mut()
        .find(|t| t.id == thread_id)
        .ok_or(MessagingError::ThreadNotFound)?;

    let message = Message {
        id: Uuid::new_v4(),
        sender: Participant::Me,
        text: text.to_string(),
        at: Utc::now(),
        attachments,
    };
    thread.messages.push(message.clone());
    guard.store.save_threads(&guard.threads)?;

    // Drop reply tasks that already ran before queueing a new one.
    guard.pending_replies.retain(|(_, h)| !h.is_finished());

    let delay = guard.reply_delay;
    let task_state = SharedState::clone(state);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Ok(mut guard) = task_state.lock() else {
            warn!("state lock poisoned, dropping simulated reply");
            return;
        };
        append_reply(&mut guard, thread_id);
    });
    guard.pending_replies.push((thread_id, handle));

    info!(thread = %thread_id, msg = %message.id, "message sent");
    Ok(Some(message))
}

/// Append the canned counter-reply, unless the thread disappeared while the
/// delay elapsed.
fn append_reply(guard: &mut AppState, thread_id: Uuid) {
    let Some(thread) = guard.threads.iter_mut().find(|t| t.id == thread_id) else {
        return;
    };
    let Some(other) = thread.other_participant().map(str::to_string) else {
        return;
    };

    thread.messages.push(Message {
        id: Uuid::new_v4(),
        sender: Participant::Contact(other),
        text: REPLY_TEXT.to_string(),
        at: Utc::now(),
        attachments: Vec::new(),
    });
    thread.unread += 1;

    if let Err(e) = guard.store.save_threads(&guard.threads) {
        warn!(thread = %thread_id, error = %e, "failed to persist simulated reply");
    }
}

/// Reset the unread counter of `thread_id`.
pub fn mark_read(state: &SharedState, thread_id: Uuid) -> Result<(), MessagingError> {
    let mut guard = state.lock().map_err(|_| MessagingError::Lock)?;
    set_unread(&mut guard, thread_id, 0)
}

/// Flip the pinned flag; returns the new value.
pub fn toggle_pin(state: &SharedState, thread_id: Uuid) -> Result<bool, MessagingError> {
    toggle(state, thread_id, |t| {
        t.pinned = !t.pinned;
        t.pinned
    })
}

/// Flip the muted flag; returns the new value.
pub fn toggle_mute(state: &SharedState, thread_id: Uuid) -> Result<bool, MessagingError> {
    toggle(state, thread_id, |t| {
        t.muted = !t.muted;
        t.muted
    })
}

/// Remove a whole conversation.
///
/// Any reply still scheduled against the thread is cancelled, so nothing can
/// fire into a deleted conversation.  Returns `false` when the id was
/// unknown.  Confirmation is the UI's job; this runs unconditionally.
pub fn delete_thread(state: &SharedState, thread_id: Uuid) -> Result<bool, MessagingError> {
    let mut guard = state.lock().map_err(|_| MessagingError::Lock)?;

    let before = guard.threads.len();
    guard.threads.retain(|t| t.id != thread_id);
    let removed = guard.threads.len() != before;

    guard.pending_replies.retain(|(tid, handle)| {
        if *tid == thread_id {
            handle.abort();
            return false;
        }
        !handle.is_finished()
    });

    if guard.active_thread == Some(thread_id) {
        guard.active_thread = None;
    }

    if removed {
        guard.store.save_threads(&guard.threads)?;
        info!(thread = %thread_id, "conversation deleted");
    }
    Ok(removed)
}

/// Build the conversation list for display.
///
/// Pinned threads come first, then descending by last-message time.  A
/// non-empty `query` keeps only threads matching by contact name, last
/// message text, or any message body (case-insensitive); `only_unread`
/// additionally drops fully-read threads.
pub fn list_threads(
    state: &SharedState,
    contacts: &[Contact],
    query: &str,
    only_unread: bool,
) -> Result<Vec<ThreadCard>, MessagingError> {
    let guard = state.lock().map_err(|_| MessagingError::Lock)?;

    let query = query.trim().to_lowercase();

    let mut cards: Vec<ThreadCard> = guard
        .threads
        .iter()
        .filter_map(|thread| {
            let contact = thread
                .other_participant()
                .and_then(|id| contacts.iter().find(|c| c.id == id))
                .cloned()
                .unwrap_or_else(Contact::unknown);

            let last = thread.messages.last();
            let last_text = last
                .map(|m| {
                    if m.text.is_empty() {
                        m.attachments
                            .first()
                            .map(|a| format!("📎 {}", a.name))
                            .unwrap_or_default()
                    } else {
                        m.text.clone()
                    }
                })
                .unwrap_or_default();

            let matches = query.is_empty()
                || contact.name.to_lowercase().contains(&query)
                || last_text.to_lowercase().contains(&query)
                || thread
                    .messages
                    .iter()
                    .any(|m| m.text.to_lowercase().contains(&query));
            if !matches || (only_unread && thread.unread == 0) {
                return None;
            }

            Some(ThreadCard {
                id: thread.id,
                contact,
                last_text,
                last_at: thread.last_message_at(),
                pinned: thread.pinned,
                muted: thread.muted,
                unread: thread.unread,
            })
        })
        .collect();

    cards.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.last_at.cmp(&a.last_at))
    });
    Ok(cards)
}

fn set_unread(guard: &mut AppState, thread_id: Uuid, value: u32) -> Result<(), MessagingError> {
    let Some(thread) = guard.threads.iter_mut().find(|t| t.id == thread_id) else {
        return Err(MessagingError::ThreadNotFound);
    };
    if thread.unread != value {
        thread.unread = value;
        guard.store.save_threads(&guard.threads)?;
    }
    Ok(())
}

fn toggle(
    state: &SharedState,
    thread_id: Uuid,
    f: impl FnOnce(&mut Thread) -> bool,
) -> Result<bool, MessagingError> {
    let mut guard = state.lock().map_err(|_| MessagingError::Lock)?;

    let thread = guard
        .threads
        .iter_mut()
        .find(|t| t.id == thread_id)
        .ok_or(MessagingError::ThreadNotFound)?;
    let value = f(thread);
    guard.store.save_threads(&guard.threads)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axon_store::Store;

    use super::*;
    use crate::contacts::sample_contacts;
    use crate::state::AppState;

    fn shared() -> SharedState {
        let state = AppState::shared(Store::open_in_memory().unwrap()).unwrap();
        state.lock().unwrap().reply_delay = Duration::from_millis(20);
        state
    }

    fn message_count(state: &SharedState, thread_id: Uuid) -> usize {
        let guard = state.lock().unwrap();
        guard
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .map(|t| t.messages.len())
            .unwrap_or(0)
    }

    fn unread(state: &SharedState, thread_id: Uuid) -> u32 {
        let guard = state.lock().unwrap();
        guard
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .map(|t| t.unread)
            .unwrap()
    }

    #[tokio::test]
    async fn open_thread_is_deduplicated() {
        let state = shared();

        let first = open_thread_with(&state, "c1").unwrap();
        let second = open_thread_with(&state, "c1").unwrap();

        assert_eq!(first, second);
        assert_eq!(state.lock().unwrap().threads.len(), 1);
    }

    #[tokio::test]
    async fn send_appends_and_schedules_reply() {
        let state = shared();
        let thread_id = open_thread_with(&state, "c1").unwrap();

        let message = send_message(&state, "hello", Vec::new()).unwrap().unwrap();
        assert!(message.sender.is_me());
        assert_eq!(message.text, "hello");
        assert_eq!(message_count(&state, thread_id), 1);

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(message_count(&state, thread_id), 2);
        assert_eq!(unread(&state, thread_id), 1);

        let guard = state.lock().unwrap();
        let reply = guard.threads[0].messages.last().unwrap();
        assert_eq!(reply.sender, Participant::Contact("c1".to_string()));
    }

    #[tokio::test]
    async fn blank_send_is_a_no_op() {
        let state = shared();
        let thread_id = open_thread_with(&state, "c1").unwrap();

        assert!(send_message(&state, "   ", Vec::new()).unwrap().is_none());
        assert_eq!(message_count(&state, thread_id), 0);

        // attachments alone are enough to send
        let sent = send_message(
            &state,
            "",
            vec![Attachment {
                name: "logo.svg".to_string(),
                size: 1240,
            }],
        )
        .unwrap();
        assert!(sent.is_some());
    }

    #[tokio::test]
    async fn deleting_the_thread_cancels_the_reply() {
        let state = shared();
        let thread_id = open_thread_with(&state, "c1").unwrap();

        send_message(&state, "hello", Vec::new()).unwrap();
        assert!(delete_thread(&state, thread_id).unwrap());

        tokio::time::sleep(Duration::from_millis(80)).await;

        let guard = state.lock().unwrap();
        assert!(guard.threads.is_empty());
        assert!(guard.active_thread.is_none());
        assert!(guard.store.load_threads().unwrap().is_empty());
    }

    #[tokio::test]
    async fn activation_marks_read() {
        let state = shared();
        let thread_id = open_thread_with(&state, "c1").unwrap();

        send_message(&state, "hi", Vec::new()).unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(unread(&state, thread_id), 1);

        set_active_thread(&state, thread_id).unwrap();
        assert_eq!(unread(&state, thread_id), 0);
    }

    #[tokio::test]
    async fn toggles_flip_and_persist() {
        let state = shared();
        let thread_id = open_thread_with(&state, "c1").unwrap();

        assert!(toggle_pin(&state, thread_id).unwrap());
        assert!(toggle_mute(&state, thread_id).unwrap());
        assert!(!toggle_pin(&state, thread_id).unwrap());

        let guard = state.lock().unwrap();
        let persisted = guard.store.load_threads().unwrap();
        assert!(persisted[0].muted);
        assert!(!persisted[0].pinned);
    }

    #[tokio::test]
    async fn list_orders_pinned_first_then_recent() {
        let state = shared();
        let contacts = sample_contacts();

        let a = open_thread_with(&state, "c1").unwrap();
        send_message(&state, "oldest", Vec::new()).unwrap();
        let b = open_thread_with(&state, "c2").unwrap();
        send_message(&state, "newest", Vec::new()).unwrap();

        let cards = list_threads(&state, &contacts, "", false).unwrap();
        assert_eq!(cards[0].id, b);
        assert_eq!(cards[1].id, a);

        toggle_pin(&state, a).unwrap();
        let cards = list_threads(&state, &contacts, "", false).unwrap();
        assert_eq!(cards[0].id, a);
    }

    #[tokio::test]
    async fn list_filters_by_query_and_unread() {
        let state = shared();
        let contacts = sample_contacts();

        open_thread_with(&state, "c1").unwrap();
        send_message(&state, "quarterly finance review", Vec::new()).unwrap();
        open_thread_with(&state, "c2").unwrap();
        send_message(&state, "logo draft", Vec::new()).unwrap();

        let cards = list_threads(&state, &contacts, "FINANCE", false).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].contact.id, "c1");

        // nothing is unread until a simulated reply lands
        let cards = list_threads(&state, &contacts, "", true).unwrap();
        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn unknown_contact_gets_placeholder() {
        let state = shared();
        open_thread_with(&state, "ghost-99").unwrap();

        let cards = list_threads(&state, &sample_contacts(), "", false).unwrap();
        assert_eq!(cards[0].contact.name, "Unknown");
    }

    #[tokio::test]
    async fn send_without_active_thread_fails() {
        let state = shared();
        assert!(matches!(
            send_message(&state, "hello", Vec::new()),
            Err(MessagingError::NoActiveThread)
        ));
    }
}
