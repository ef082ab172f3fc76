//! Help-desk tickets.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use axon_store::models::{Ticket, TicketStatus};

use crate::error::TicketError;
use crate::state::SharedState;

/// Record a support request.  Subject and message are both required.
pub fn submit_ticket(
    state: &SharedState,
    subject: &str,
    message: &str,
) -> Result<Ticket, TicketError> {
    let subject = subject.trim();
    let message = message.trim();
    if subject.is_empty() || message.is_empty() {
        return Err(TicketError::MissingFields);
    }

    let mut guard = state.lock().map_err(|_| TicketError::Lock)?;

    let ticket = Ticket {
        id: Uuid::new_v4(),
        subject: subject.to_string(),
        message: message.to_string(),
        at: Utc::now(),
        status: TicketStatus::Open,
    };
    guard.tickets.push(ticket.clone());
    guard.store.save_tickets(&guard.tickets)?;

    info!(ticket = %ticket.id, "ticket submitted");
    Ok(ticket)
}

/// All submitted tickets, oldest first.
pub fn list_tickets(state: &SharedState) -> Result<Vec<Ticket>, TicketError> {
    let guard = state.lock().map_err(|_| TicketError::Lock)?;
    Ok(guard.tickets.clone())
}

#[cfg(test)]
mod tests {
    use axon_store::Store;

    use super::*;
    use crate::state::AppState;

    fn shared() -> SharedState {
        AppState::shared(Store::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn submit_appends_and_persists() {
        let state = shared();

        let ticket = submit_ticket(&state, " VPN access ", "Cannot connect").unwrap();
        assert_eq!(ticket.subject, "VPN access");
        assert_eq!(ticket.status, TicketStatus::Open);

        let listed = list_tickets(&state).unwrap();
        assert_eq!(listed, vec![ticket]);

        let guard = state.lock().unwrap();
        assert_eq!(guard.store.load_tickets().unwrap(), listed);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let state = shared();

        assert!(matches!(
            submit_ticket(&state, "  ", "body"),
            Err(TicketError::MissingFields)
        ));
        assert!(matches!(
            submit_ticket(&state, "subject", ""),
            Err(TicketError::MissingFields)
        ));
        assert!(list_tickets(&state).unwrap().is_empty());
    }
}
