use axon_store::StoreError;
use thiserror::Error;

/// Identity & session failures.  The messages are shown to the user as-is.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Account not found")]
    NotFound,

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Old password is incorrect")]
    WrongOldPassword,

    /// The session id no longer resolves to a registered user.
    #[error("User record not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("State lock poisoned")]
    Lock,
}

/// Messaging store failures.
#[derive(Error, Debug)]
pub enum MessagingError {
    #[error("No conversation is open")]
    NoActiveThread,

    #[error("Conversation not found")]
    ThreadNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("State lock poisoned")]
    Lock,
}

/// Calendar failures.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Event title is required")]
    MissingTitle,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("State lock poisoned")]
    Lock,
}

/// Help-ticket failures.
#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Subject and message are required")]
    MissingFields,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("State lock poisoned")]
    Lock,
}

/// Settings failures.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("State lock poisoned")]
    Lock,
}
