//! Persistence for the registered-user collection and the current session.
//!
//! The session key holds only the logged-in user's id; callers resolve the
//! full record through [`Store::load_users`] so the session can never drift
//! from the registry.

use uuid::Uuid;

use crate::error::Result;
use crate::keys;
use crate::models::User;
use crate::store::Store;

impl Store {
    /// Load the registered-user collection.  Absent or corrupt data reads as
    /// an empty list.
    pub fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.get_json(keys::USERS)?.unwrap_or_default())
    }

    /// Rewrite the whole registered-user collection.
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        self.set_json(keys::USERS, &users)
    }

    /// Id of the currently logged-in user, if any.
    pub fn current_user_id(&self) -> Result<Option<Uuid>> {
        self.get_json(keys::CURRENT_USER)
    }

    /// Record `id` as the active session.
    pub fn set_current_user(&self, id: Uuid) -> Result<()> {
        self.set_json(keys::CURRENT_USER, &id)
    }

    /// Drop the active session.  Clearing an absent session is not an error.
    pub fn clear_current_user(&self) -> Result<()> {
        self.remove(keys::CURRENT_USER)?;
        Ok(())
    }
}
