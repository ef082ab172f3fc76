//! Domain model structs persisted as JSON blobs in the local database.
//!
//! Field names serialize in camelCase so the stored JSON matches the blobs
//! the original browser build wrote (`darkMode`, `weeklyDigest`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user account.
///
/// Uniqueness key is the lowercased email.  The password is stored as a
/// bcrypt hash, never as plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Lowercased at signup; compared case-insensitively everywhere.
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    pub role: String,
    /// Avatar URI.
    pub avatar: String,
    pub preferences: Preferences,
}

/// Per-user preferences, deep-merged on profile update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: NotificationPrefs,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            weekly_digest: true,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: NotificationPrefs::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

/// One side of a conversation: the local user or a contact id.
///
/// Serialized as the string `"me"` or the contact id, matching the stored
/// thread blobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Participant {
    Me,
    Contact(String),
}

impl Participant {
    pub fn is_me(&self) -> bool {
        matches!(self, Participant::Me)
    }

    /// The contact id, if this participant is not the local user.
    pub fn contact_id(&self) -> Option<&str> {
        match self {
            Participant::Me => None,
            Participant::Contact(id) => Some(id),
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Me => write!(f, "me"),
            Participant::Contact(id) => write!(f, "{id}"),
        }
    }
}

impl From<String> for Participant {
    fn from(s: String) -> Self {
        if s == "me" {
            Participant::Me
        } else {
            Participant::Contact(s)
        }
    }
}

impl Serialize for Participant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Participant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(String::deserialize(deserializer)?.into())
    }
}

/// A two-party conversation between the local user and one contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: Uuid,
    /// Exactly two entries; one is always [`Participant::Me`].
    pub participants: Vec<Participant>,
    pub pinned: bool,
    pub muted: bool,
    /// Messages received while the thread was not active.  Reset to 0 when
    /// the thread becomes the open one.
    pub unread: u32,
    /// Append-only; individual messages are never edited or deleted.
    pub messages: Vec<Message>,
}

impl Thread {
    /// Create an empty thread with the given contact.
    pub fn with_contact(contact_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            participants: vec![Participant::Me, Participant::Contact(contact_id.to_string())],
            pinned: false,
            muted: false,
            unread: 0,
            messages: Vec::new(),
        }
    }

    /// The non-local participant's contact id, if present.
    pub fn other_participant(&self) -> Option<&str> {
        self.participants.iter().find_map(|p| p.contact_id())
    }

    /// Whether this thread's participant pair includes `contact_id`.
    pub fn includes_contact(&self, contact_id: &str) -> bool {
        self.participants
            .iter()
            .any(|p| p.contact_id() == Some(contact_id))
    }

    /// Timestamp of the most recent message.
    pub fn last_message_at(&self) -> Option<DateTime<Utc>> {
        self.messages.last().map(|m| m.at)
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender: Participant,
    pub text: String,
    pub at: DateTime<Utc>,
    pub attachments: Vec<Attachment>,
}

/// File metadata carried on a message.  Only the name and size are kept;
/// there is no blob storage behind them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub size: u64,
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// Category of a calendar entry; drives the colour badge in the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Deadline,
    Task,
    Leave,
    Other,
}

/// A calendar entry.  Times are naive wall-clock strings (`"HH:MM"`); the
/// ICS export derives UTC-suffixed stamps from them without any timezone
/// correction, as the original app did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: String,
    pub attendees: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Help tickets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
}

/// A support request submitted from the Help screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub subject: String,
    pub message: String,
    pub at: DateTime<Utc>,
    pub status: TicketStatus,
}
