//! Work calendar.
//!
//! Events live in the shared state and are rewritten to the store on every
//! mutation.  The grouping and month-grid helpers are pure functions over an
//! event slice so the view layer can call them without holding the lock.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::info;

use axon_store::models::CalendarEvent;

use crate::error::CalendarError;
use crate::state::SharedState;

/// Insert or replace an event, keyed by its id.
///
/// A blank title is rejected; everything else passes through unvalidated,
/// times included.
pub fn save_event(state: &SharedState, event: CalendarEvent) -> Result<(), CalendarError> {
    if event.title.trim().is_empty() {
        return Err(CalendarError::MissingTitle);
    }

    let mut guard = state.lock().map_err(|_| CalendarError::Lock)?;

    match guard.events.iter_mut().find(|e| e.id == event.id) {
        Some(existing) => *existing = event,
        None => guard.events.push(event),
    }
    guard.store.save_events(&guard.events)?;

    info!(count = guard.events.len(), "calendar saved");
    Ok(())
}

/// Remove an event by id.  Returns `false` when the id was unknown.
pub fn delete_event(state: &SharedState, event_id: &str) -> Result<bool, CalendarError> {
    let mut guard = state.lock().map_err(|_| CalendarError::Lock)?;

    let before = guard.events.len();
    guard.events.retain(|e| e.id != event_id);
    let removed = guard.events.len() != before;

    if removed {
        guard.store.save_events(&guard.events)?;
    }
    Ok(removed)
}

/// Events matching `query` (case-insensitive over title, location,
/// attendees and description).  An empty query returns everything.
pub fn list_events(state: &SharedState, query: &str) -> Result<Vec<CalendarEvent>, CalendarError> {
    let guard = state.lock().map_err(|_| CalendarError::Lock)?;

    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Ok(guard.events.clone());
    }

    Ok(guard
        .events
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&query)
                || e.location.to_lowercase().contains(&query)
                || e.attendees.to_lowercase().contains(&query)
                || e.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect())
}

/// Render the whole calendar as an ICS document.
pub fn export_ics(state: &SharedState) -> Result<String, CalendarError> {
    let guard = state.lock().map_err(|_| CalendarError::Lock)?;
    Ok(axon_export::ics::to_ics(&guard.events))
}

/// Group events by date, each day sorted by start time.
pub fn events_by_day(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<CalendarEvent>> {
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        days.entry(event.date).or_default().push(event.clone());
    }
    for day in days.values_mut() {
        day.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }
    days
}

/// The next events from `today` onward, date-then-time order, at most 8.
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate) -> Vec<CalendarEvent> {
    let mut out: Vec<CalendarEvent> = events.iter().filter(|e| e.date >= today).cloned().collect();
    out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.start_time.cmp(&b.start_time)));
    out.truncate(8);
    out
}

/// The Monday of the week containing `date`.
pub fn start_of_week_monday(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date - Days::new(back)
}

/// The 42 cells of a month view: six Monday-based weeks starting from the
/// Monday of the week containing the 1st.  Cells outside the month belong to
/// the adjacent months.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let start = start_of_week_monday(first);
    Some((0..42).map(|i| start + Days::new(i)).collect())
}

#[cfg(test)]
mod tests {
    use axon_store::models::EventType;
    use axon_store::Store;

    use super::*;
    use crate::state::AppState;

    fn shared() -> SharedState {
        AppState::shared(Store::open_in_memory().unwrap()).unwrap()
    }

    fn event(id: &str, title: &str, date: (i32, u32, u32), start: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_time: start.to_string(),
            end_time: String::new(),
            event_type: EventType::Meeting,
            location: String::new(),
            attendees: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn save_upserts_by_id() {
        let state = shared();

        save_event(&state, event("e1", "Planning", (2025, 9, 8), "10:00")).unwrap();
        save_event(&state, event("e1", "Planning (moved)", (2025, 9, 9), "14:00")).unwrap();

        let events = list_events(&state, "").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Planning (moved)");

        // persisted too
        let guard = state.lock().unwrap();
        assert_eq!(guard.store.load_events().unwrap(), events);
    }

    #[test]
    fn blank_title_is_rejected() {
        let state = shared();
        assert!(matches!(
            save_event(&state, event("e1", "   ", (2025, 9, 8), "10:00")),
            Err(CalendarError::MissingTitle)
        ));
        assert!(list_events(&state, "").unwrap().is_empty());
    }

    #[test]
    fn delete_reports_whether_it_removed() {
        let state = shared();
        save_event(&state, event("e1", "Planning", (2025, 9, 8), "10:00")).unwrap();

        assert!(delete_event(&state, "e1").unwrap());
        assert!(!delete_event(&state, "e1").unwrap());
    }

    #[test]
    fn query_searches_all_text_fields() {
        let state = shared();
        let mut e = event("e1", "Planning", (2025, 9, 8), "10:00");
        e.location = "Room A".to_string();
        save_event(&state, e).unwrap();
        save_event(&state, event("e2", "Review", (2025, 9, 9), "09:00")).unwrap();

        assert_eq!(list_events(&state, "room a").unwrap().len(), 1);
        assert_eq!(list_events(&state, "REVIEW").unwrap().len(), 1);
        assert!(list_events(&state, "retro").unwrap().is_empty());
    }

    #[test]
    fn days_are_sorted_by_start_time() {
        let events = vec![
            event("e1", "Late", (2025, 9, 8), "15:00"),
            event("e2", "Early", (2025, 9, 8), "09:00"),
            event("e3", "Other day", (2025, 9, 9), "10:00"),
        ];

        let days = events_by_day(&events);
        assert_eq!(days.len(), 2);
        let monday = &days[&NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()];
        assert_eq!(monday[0].title, "Early");
        assert_eq!(monday[1].title, "Late");
    }

    #[test]
    fn upcoming_skips_past_and_caps_at_eight() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
        let mut events = vec![event("past", "Past", (2025, 9, 1), "10:00")];
        for i in 0..10 {
            events.push(event(&format!("e{i}"), "Next", (2025, 9, 10 + i), "10:00"));
        }

        let up = upcoming(&events, today);
        assert_eq!(up.len(), 8);
        assert_eq!(up[0].date, today);
        assert!(up.iter().all(|e| e.date >= today));
    }

    #[test]
    fn week_starts_on_monday() {
        // 2025-09-10 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
        assert_eq!(
            start_of_week_monday(wed),
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()
        );
        // a Monday maps to itself
        let mon = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        assert_eq!(start_of_week_monday(mon), mon);
    }

    #[test]
    fn month_grid_is_42_monday_aligned_cells() {
        // September 2025 starts on a Monday
        let grid = month_grid(2025, 9).unwrap();
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(grid[0].weekday(), Weekday::Mon);

        // November 2025 starts on a Saturday; grid leads with late October
        let grid = month_grid(2025, 11).unwrap();
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2025, 10, 27).unwrap());
        assert_eq!(grid[41], NaiveDate::from_ymd_opt(2025, 12, 7).unwrap());

        assert!(month_grid(2025, 13).is_none());
    }

    #[test]
    fn export_wraps_current_events() {
        let state = shared();
        save_event(&state, event("e1", "Planning", (2025, 9, 8), "10:00")).unwrap();

        let ics = export_ics(&state).unwrap();
        assert!(ics.contains("UID:e1@axon-admin"));
        assert!(ics.contains("SUMMARY:Planning"));
    }
}
