//! Operation surface backing each screen of the dashboard.

pub mod auth;
pub mod calendar;
pub mod messaging;
pub mod reports;
pub mod settings;
pub mod tickets;
