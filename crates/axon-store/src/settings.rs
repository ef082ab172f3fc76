//! Persistence for standalone app settings (currently just the dark-mode
//! flag).

use crate::error::Result;
use crate::keys;
use crate::store::Store;

impl Store {
    /// Whether dark mode is enabled.  Defaults to `false` when unset.
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.get_json(keys::DARK_MODE)?.unwrap_or(false))
    }

    /// Persist the dark-mode flag.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.set_json(keys::DARK_MODE, &enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        let store = Store::open_in_memory().unwrap();
        assert!(!store.dark_mode().unwrap());
    }

    #[test]
    fn flag_round_trip() {
        let store = Store::open_in_memory().unwrap();
        store.set_dark_mode(true).unwrap();
        assert!(store.dark_mode().unwrap());
        store.set_dark_mode(false).unwrap();
        assert!(!store.dark_mode().unwrap());
    }
}
