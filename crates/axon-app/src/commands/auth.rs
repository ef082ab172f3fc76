//! Identity & session management.
//!
//! A local, single-device registry of accounts plus one active session.  The
//! session key stores only the user id; every read resolves the record
//! through the registry, so profile edits can never leave a stale cached
//! copy behind.  Passwords are bcrypt-hashed before they touch the store.

use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::info;
use uuid::Uuid;

use axon_store::models::{Preferences, User};

use crate::contacts::avatar_url;
use crate::error::AuthError;
use crate::state::SharedState;

/// Role assigned to self-registered accounts.
const DEFAULT_ROLE: &str = "Administrator";

/// Input for [`signup`].
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Partial profile update; unset fields are left untouched.  The
/// preferences sub-object merges field by field rather than being replaced.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
    pub preferences: Option<PreferencesUpdate>,
}

#[derive(Debug, Clone, Default)]
pub struct PreferencesUpdate {
    pub dark_mode: Option<bool>,
    pub notifications: Option<NotificationUpdate>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationUpdate {
    pub email: Option<bool>,
    pub push: Option<bool>,
    pub weekly_digest: Option<bool>,
}

/// Register a new account and log it in.
///
/// The email is trimmed and lowercased before the uniqueness check; a
/// collision leaves the registry untouched.
pub fn signup(state: &SharedState, req: SignupRequest) -> Result<User, AuthError> {
    let mut guard = state.lock().map_err(|_| AuthError::Lock)?;

    let name = req.name.trim().to_string();
    let email = req.email.trim().to_lowercase();
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(AuthError::MissingFields);
    }

    let mut users = guard.store.load_users()?;
    if users.iter().any(|u| u.email == email) {
        return Err(AuthError::DuplicateEmail);
    }

    let password_hash = hash(&req.password, DEFAULT_COST)?;

    let avatar = req
        .avatar
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| avatar_url(&name));

    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash,
        role: DEFAULT_ROLE.to_string(),
        avatar,
        preferences: Preferences {
            dark_mode: guard.dark_mode,
            ..Preferences::default()
        },
    };

    users.push(user.clone());
    guard.store.save_users(&users)?;

    guard.store.set_current_user(user.id)?;
    guard.session = Some(user.id);

    info!(user = %user.id, email = %user.email, "account created");
    Ok(user)
}

/// Authenticate against the registry and open a session.
///
/// A failed attempt leaves any existing session untouched.
pub fn login(state: &SharedState, email: &str, password: &str) -> Result<User, AuthError> {
    let mut guard = state.lock().map_err(|_| AuthError::Lock)?;

    let email = email.trim().to_lowercase();
    let users = guard.store.load_users()?;
    let found = users
        .iter()
        .find(|u| u.email == email)
        .ok_or(AuthError::NotFound)?;

    if !verify(password, &found.password_hash)? {
        return Err(AuthError::WrongPassword);
    }

    guard.store.set_current_user(found.id)?;
    guard.session = Some(found.id);

    info!(user = %found.id, "logged in");
    Ok(found.clone())
}

/// Close the active session.  Logging out twice is fine.
pub fn logout(state: &SharedState) -> Result<(), AuthError> {
    let mut guard = state.lock().map_err(|_| AuthError::Lock)?;

    guard.store.clear_current_user()?;
    guard.session = None;
    Ok(())
}

/// The logged-in user, resolved through the registry.  Returns `None` when
/// there is no session or the id no longer resolves.
pub fn current_user(state: &SharedState) -> Result<Option<User>, AuthError> {
    let guard = state.lock().map_err(|_| AuthError::Lock)?;

    let Some(id) = guard.session else {
        return Ok(None);
    };

    let users = guard.store.load_users()?;
    Ok(users.into_iter().find(|u| u.id == id))
}

/// Whether a resolvable session exists.
pub fn is_authenticated(state: &SharedState) -> bool {
    matches!(current_user(state), Ok(Some(_)))
}

/// Apply a partial profile update to the logged-in user.
///
/// Top-level fields are replaced; preferences deep-merge down to the
/// individual notification flags.
pub fn update_user(state: &SharedState, update: UserUpdate) -> Result<User, AuthError> {
    let guard = state.lock().map_err(|_| AuthError::Lock)?;

    let session = guard.session.ok_or(AuthError::NotLoggedIn)?;
    let mut users = guard.store.load_users()?;
    let user = users
        .iter_mut()
        .find(|u| u.id == session)
        .ok_or(AuthError::UserNotFound)?;

    if let Some(name) = update.name {
        user.name = name;
    }
    if let Some(avatar) = update.avatar {
        user.avatar = avatar;
    }
    if let Some(role) = update.role {
        user.role = role;
    }
    if let Some(prefs) = update.preferences {
        if let Some(dark_mode) = prefs.dark_mode {
            user.preferences.dark_mode = dark_mode;
        }
        if let Some(n) = prefs.notifications {
            if let Some(email) = n.email {
                user.preferences.notifications.email = email;
            }
            if let Some(push) = n.push {
                user.preferences.notifications.push = push;
            }
            if let Some(weekly) = n.weekly_digest {
                user.preferences.notifications.weekly_digest = weekly;
            }
        }
    }

    let updated = user.clone();
    guard.store.save_users(&users)?;

    info!(user = %updated.id, "profile updated");
    Ok(updated)
}

/// Replace the logged-in user's password after verifying the old one.
pub fn change_password(state: &SharedState, old: &str, new: &str) -> Result<(), AuthError> {
    let guard = state.lock().map_err(|_| AuthError::Lock)?;

    let session = guard.session.ok_or(AuthError::NotLoggedIn)?;
    let mut users = guard.store.load_users()?;
    let user = users
        .iter_mut()
        .find(|u| u.id == session)
        .ok_or(AuthError::UserNotFound)?;

    if !verify(old, &user.password_hash)? {
        return Err(AuthError::WrongOldPassword);
    }

    user.password_hash = hash(new, DEFAULT_COST)?;
    guard.store.save_users(&users)?;

    info!(user = %session, "password changed");
    Ok(())
}
