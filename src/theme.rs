//! Theme preference persistence

use crate::cache::Storage;

/// Storage key for the saved theme.
const STORAGE_KEY: &str = "theme";

/// Color theme for rendered pages. Dark is the default; the stored value
/// is only honored when it is exactly "light".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Saved theme choice, stored raw in the storage medium with no expiry.
pub struct ThemePreference<S> {
    storage: S,
}

impl<S: Storage> ThemePreference<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the saved theme; anything but "light" means dark.
    pub fn load(&self) -> Theme {
        match self.storage.read(STORAGE_KEY) {
            Ok(Some(value)) if value == "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Persist a theme choice. Best-effort, like all preference writes.
    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.storage.write(STORAGE_KEY, theme.as_str()) {
            tracing::warn!("theme preference write failed: {}", e);
        }
    }

    /// Flip the saved theme and return the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.load().flipped();
        self.save(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStorage;

    #[test]
    fn test_defaults_to_dark() {
        let pref = ThemePreference::new(MemoryStorage::new());
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let pref = ThemePreference::new(MemoryStorage::new());
        pref.save(Theme::Light);
        assert_eq!(pref.load(), Theme::Light);
        pref.save(Theme::Dark);
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_toggle_roundtrip() {
        let pref = ThemePreference::new(MemoryStorage::new());
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.toggle(), Theme::Dark);
        assert_eq!(pref.load(), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_means_dark() {
        let storage = MemoryStorage::new();
        storage.write("theme", "neon").unwrap();
        let pref = ThemePreference::new(storage);
        assert_eq!(pref.load(), Theme::Dark);
    }
}
