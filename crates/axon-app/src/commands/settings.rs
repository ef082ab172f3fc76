//! Global appearance settings.
//!
//! Dark mode is a single flag shared by all screens, cached on the state and
//! persisted under its own key.  Per-user preference edits go through the
//! auth commands instead.

use crate::error::SettingsError;
use crate::state::SharedState;

pub fn dark_mode(state: &SharedState) -> Result<bool, SettingsError> {
    let guard = state.lock().map_err(|_| SettingsError::Lock)?;
    Ok(guard.dark_mode)
}

pub fn set_dark_mode(state: &SharedState, enabled: bool) -> Result<(), SettingsError> {
    let mut guard = state.lock().map_err(|_| SettingsError::Lock)?;

    guard.dark_mode = enabled;
    guard.store.set_dark_mode(enabled)?;
    Ok(())
}
