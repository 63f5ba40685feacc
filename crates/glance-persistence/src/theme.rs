//! Persisted theme preference.

use crate::error::PersistenceResult;
use crate::prefs::PrefStore;
use glance_core::Theme;
use tracing::warn;

/// Storage key for the theme preference.
const THEME_KEY: &str = "theme";

/// Theme preference on top of the key-value store.
///
/// Read at startup (default light when absent or unparseable),
/// written on each toggle.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    prefs: PrefStore,
}

impl ThemeStore {
    pub fn new(prefs: PrefStore) -> Self {
        Self { prefs }
    }

    /// The currently persisted theme.
    pub fn theme(&self) -> Theme {
        match self.prefs.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring unparseable persisted theme");
                Theme::default()
            }),
            None => Theme::default(),
        }
    }

    /// Persist a specific theme.
    pub fn set(&self, theme: Theme) -> PersistenceResult<()> {
        self.prefs.set(THEME_KEY, theme.as_str())
    }

    /// Flip the persisted theme and return the new value.
    pub fn toggle(&self) -> PersistenceResult<Theme> {
        let next = self.theme().toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ThemeStore {
        ThemeStore::new(PrefStore::load(dir.path().join("prefs.json")).unwrap())
    }

    #[test]
    fn test_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).theme(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let original = store.theme();
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), original);
        assert_eq!(store.theme(), original);
    }

    #[test]
    fn test_toggle_persists_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).toggle().unwrap();

        // A fresh store over the same file sees the flipped value.
        assert_eq!(store_in(&dir).theme(), Theme::Dark);
    }

    #[test]
    fn test_garbage_value_falls_back_to_light() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefStore::load(dir.path().join("prefs.json")).unwrap();
        prefs.set("theme", "sepia").unwrap();

        assert_eq!(ThemeStore::new(prefs).theme(), Theme::Light);
    }
}
