//! Persistence for the calendar-event collection.

use crate::error::Result;
use crate::keys;
use crate::models::CalendarEvent;
use crate::store::Store;

impl Store {
    /// Load all calendar events.  Absent or corrupt data reads as an empty
    /// list.
    pub fn load_events(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self.get_json(keys::CALENDAR_EVENTS)?.unwrap_or_default())
    }

    /// Rewrite the whole event collection.
    pub fn save_events(&self, events: &[CalendarEvent]) -> Result<()> {
        self.set_json(keys::CALENDAR_EVENTS, &events)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::EventType;

    fn event(id: &str, title: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            event_type: EventType::Meeting,
            location: "Room A".to_string(),
            attendees: "FE team".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn events_round_trip() {
        let store = Store::open_in_memory().unwrap();

        let events = vec![event("e1", "Sprint planning"), event("e2", "Design review")];
        store.save_events(&events).unwrap();

        assert_eq!(store.load_events().unwrap(), events);
    }

    #[test]
    fn event_type_serializes_lowercase() {
        let json = serde_json::to_value(event("e1", "t")).unwrap();
        assert_eq!(json["type"], "meeting");
        assert_eq!(json["startTime"], "10:00");
    }
}
