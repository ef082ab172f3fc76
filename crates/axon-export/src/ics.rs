//! Minimal ICS rendering of the work calendar.
//!
//! One `VEVENT` per entry inside a single `VCALENDAR`, CRLF line endings.
//! Date-times are derived naively from the stored local date and `"HH:MM"`
//! strings and suffixed with `Z`; there is no timezone correction, matching
//! the original export.

use axon_store::models::CalendarEvent;

/// Render `events` as an ICS document.
pub fn to_ics(events: &[CalendarEvent]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//Axon Admin//Calendar//VI".to_string(),
    ];

    for event in events {
        let date = event.date.format("%Y%m%d").to_string();
        let start = time_stamp(&event.start_time);
        let end = time_stamp(&event.end_time);

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@axon-admin", event.id));
        lines.push(format!("DTSTAMP:{date}T{start}Z"));
        lines.push(format!("DTSTART:{date}T{start}Z"));
        lines.push(format!("DTEND:{date}T{end}Z"));
        lines.push(format!("SUMMARY:{}", event.title));
        lines.push(format!(
            "DESCRIPTION:{}",
            event.description.replace('\n', "\\n")
        ));
        lines.push(format!("LOCATION:{}", event.location));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

/// `"10:30"` -> `"103000"`; blank times fall back to midnight.
fn time_stamp(hhmm: &str) -> String {
    let hhmm = if hhmm.is_empty() { "00:00" } else { hhmm };
    format!("{}00", hhmm.replace(':', ""))
}
