//! Light/dark theme preference
//!
//! Dark is the default and is stored as the absence of the key.

mod storage;

use anyhow::Result;

pub use storage::{FileStorage, MemoryStorage, Storage, STORAGE_FILE};

use crate::dom::Document;

/// Storage key of the preference
pub const THEME_KEY: &str = "theme";
/// Class set on the document root in light mode
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Read the stored preference; anything but `"light"` is dark
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(THEME_KEY).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn store(self, storage: &mut dyn Storage) -> Result<()> {
        match self {
            Theme::Light => storage.set(THEME_KEY, "light"),
            Theme::Dark => storage.remove(THEME_KEY),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn apply<D: Document>(self, document: &mut D) {
        document.set_root_class(LIGHT_CLASS, self == Theme::Light);
    }
}

/// Apply the stored preference at startup
pub fn init<D: Document>(storage: &dyn Storage, document: &mut D) -> Theme {
    let theme = Theme::load(storage);
    theme.apply(document);
    theme
}

/// Flip the preference, persist it and apply it
pub fn toggle<D: Document>(storage: &mut dyn Storage, document: &mut D) -> Result<Theme> {
    let theme = Theme::load(storage).toggled();
    theme.store(storage)?;
    theme.apply(document);
    tracing::debug!("Theme switched to {}", theme.as_str());
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    #[test]
    fn test_default_is_dark() {
        let storage = MemoryStorage::new();
        let mut doc = MemoryDocument::new("https://example.com/").unwrap();
        assert_eq!(init(&storage, &mut doc), Theme::Dark);
        assert!(!doc.root_has_class(LIGHT_CLASS));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut storage = MemoryStorage::new();
        let mut doc = MemoryDocument::new("https://example.com/").unwrap();

        assert_eq!(toggle(&mut storage, &mut doc).unwrap(), Theme::Light);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
        assert!(doc.root_has_class(LIGHT_CLASS));

        assert_eq!(toggle(&mut storage, &mut doc).unwrap(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY), None);
        assert!(!doc.root_has_class(LIGHT_CLASS));
    }

    #[test]
    fn test_unknown_value_is_dark() {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(Theme::load(&storage), Theme::Dark);
    }
}
