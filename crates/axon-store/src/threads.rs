//! Persistence for the message-thread collection.

use crate::error::Result;
use crate::keys;
use crate::models::Thread;
use crate::store::Store;

impl Store {
    /// Load all conversation threads.  Absent or corrupt data reads as an
    /// empty list.
    pub fn load_threads(&self) -> Result<Vec<Thread>> {
        Ok(self.get_json(keys::THREADS)?.unwrap_or_default())
    }

    /// Rewrite the whole thread collection.
    pub fn save_threads(&self, threads: &[Thread]) -> Result<()> {
        self.set_json(keys::THREADS, &threads)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::{Attachment, Message, Participant};

    #[test]
    fn threads_round_trip() {
        let store = Store::open_in_memory().unwrap();

        let mut thread = Thread::with_contact("c1");
        thread.messages.push(Message {
            id: Uuid::new_v4(),
            sender: Participant::Me,
            text: "hello".to_string(),
            at: Utc::now(),
            attachments: vec![Attachment {
                name: "logo.svg".to_string(),
                size: 1240,
            }],
        });
        thread.unread = 2;
        thread.pinned = true;

        let threads = vec![thread];
        store.save_threads(&threads).unwrap();

        assert_eq!(store.load_threads().unwrap(), threads);
    }

    #[test]
    fn empty_collection_by_default() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.load_threads().unwrap().is_empty());
    }
}
