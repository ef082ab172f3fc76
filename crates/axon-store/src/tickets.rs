//! Persistence for help-desk tickets.

use crate::error::Result;
use crate::keys;
use crate::models::Ticket;
use crate::store::Store;

impl Store {
    /// Load all submitted tickets.  Absent or corrupt data reads as an empty
    /// list.
    pub fn load_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.get_json(keys::TICKETS)?.unwrap_or_default())
    }

    /// Rewrite the whole ticket collection.
    pub fn save_tickets(&self, tickets: &[Ticket]) -> Result<()> {
        self.set_json(keys::TICKETS, &tickets)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::TicketStatus;

    #[test]
    fn tickets_round_trip() {
        let store = Store::open_in_memory().unwrap();

        let tickets = vec![Ticket {
            id: Uuid::new_v4(),
            subject: "Report page broken".to_string(),
            message: "The export button does nothing".to_string(),
            at: Utc::now(),
            status: TicketStatus::Open,
        }];
        store.save_tickets(&tickets).unwrap();

        let loaded = store.load_tickets().unwrap();
        assert_eq!(loaded, tickets);

        let json = serde_json::to_value(&loaded[0]).unwrap();
        assert_eq!(json["status"], "open");
    }
}
