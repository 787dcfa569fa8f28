//! Dark/light theme preference
//!
//! [`ThemePreferenceStore`] owns the current preference. Every change is
//! pushed to a [`ThemeTarget`] (the document root in the browser) and written
//! to a [`PreferenceStorage`] under [`THEME_STORAGE_KEY`].

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Storage key for the persisted preference
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Attribute written on the document root; style rules key on it
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` means light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// Icon shown on the toggle button (the theme it switches to)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "☀️",
            ThemePreference::Light => "🌙",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "Switch to light mode",
            ThemePreference::Light => "Switch to dark mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Durable key/value storage
pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

/// Receives the theme marker whenever the preference changes
pub trait ThemeTarget {
    fn apply(&self, theme: ThemePreference);
}

/// In-memory storage, used during server rendering and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Target that ignores theme changes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTarget;

impl ThemeTarget for NoTarget {
    fn apply(&self, _theme: ThemePreference) {}
}

/// Owner of the current theme preference
#[derive(Debug)]
pub struct ThemePreferenceStore<S, T> {
    storage: S,
    target: T,
    current: ThemePreference,
}

impl<S: PreferenceStorage, T: ThemeTarget> ThemePreferenceStore<S, T> {
    /// Read the stored preference (dark when absent) and apply it.
    ///
    /// A persistence failure is returned alongside the store; the store is
    /// usable either way.
    pub fn load(storage: S, target: T) -> (Self, Result<(), StorageError>) {
        let current = storage
            .load(THEME_STORAGE_KEY)
            .map(|value| ThemePreference::from_stored(&value))
            .unwrap_or_default();

        let store = Self {
            storage,
            target,
            current,
        };
        let committed = store.commit();
        (store, committed)
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Flip dark and light, apply and persist
    pub fn toggle(&mut self) -> Result<ThemePreference, StorageError> {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, theme: ThemePreference) -> Result<ThemePreference, StorageError> {
        self.current = theme;
        self.commit().map(|()| theme)
    }

    /// Push the current preference to the target and to storage
    pub fn commit(&self) -> Result<(), StorageError> {
        self.target.apply(self.current);
        self.storage.save(THEME_STORAGE_KEY, self.current.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        applied: RefCell<Vec<ThemePreference>>,
    }

    impl ThemeTarget for RecordingTarget {
        fn apply(&self, theme: ThemePreference) {
            self.applied.borrow_mut().push(theme);
        }
    }

    struct FullStorage;

    impl PreferenceStorage for FullStorage {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_defaults_to_dark_without_stored_value() {
        let (store, committed) = ThemePreferenceStore::load(MemoryStorage::new(), NoTarget);
        assert!(committed.is_ok());
        assert_eq!(store.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_initial_load_applies_and_persists() {
        let (store, _) =
            ThemePreferenceStore::load(MemoryStorage::new(), RecordingTarget::default());
        assert_eq!(*store.target().applied.borrow(), vec![ThemePreference::Dark]);
        assert_eq!(
            store.storage().load(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_restores_stored_light() {
        let storage = MemoryStorage::with_value(THEME_STORAGE_KEY, "light");
        let (store, _) = ThemePreferenceStore::load(storage, NoTarget);
        assert_eq!(store.current(), ThemePreference::Light);
    }

    #[test]
    fn test_unknown_stored_value_means_light() {
        assert_eq!(ThemePreference::from_stored("sepia"), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored("dark"), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_is_involution() {
        let (mut store, _) = ThemePreferenceStore::load(MemoryStorage::new(), NoTarget);
        let start = store.current();

        store.toggle().unwrap();
        assert_ne!(store.current(), start);
        store.toggle().unwrap();
        assert_eq!(store.current(), start);
    }

    #[test]
    fn test_persisted_value_tracks_memory() {
        let (mut store, _) = ThemePreferenceStore::load(MemoryStorage::new(), NoTarget);
        for _ in 0..5 {
            let theme = store.toggle().unwrap();
            assert_eq!(theme, store.current());
            assert_eq!(
                store.storage().load(THEME_STORAGE_KEY).as_deref(),
                Some(store.current().as_str())
            );
        }
    }

    #[test]
    fn test_every_change_reaches_target() {
        let (mut store, _) =
            ThemePreferenceStore::load(MemoryStorage::new(), RecordingTarget::default());
        store.toggle().unwrap();
        store.set(ThemePreference::Light).unwrap();

        assert_eq!(
            *store.target().applied.borrow(),
            vec![
                ThemePreference::Dark,
                ThemePreference::Light,
                ThemePreference::Light
            ]
        );
    }

    #[test]
    fn test_storage_failure_still_applies_theme() {
        let (mut store, committed) = ThemePreferenceStore::load(FullStorage, RecordingTarget::default());
        assert!(committed.is_err());

        let result = store.toggle();
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(store.current(), ThemePreference::Light);
        assert_eq!(
            store.target().applied.borrow().last(),
            Some(&ThemePreference::Light)
        );
    }

    #[test]
    fn test_toggle_icon_and_label() {
        assert_eq!(ThemePreference::Dark.toggle_icon(), "☀️");
        assert_eq!(ThemePreference::Light.toggle_icon(), "🌙");
        assert_eq!(ThemePreference::Dark.toggle_label(), "Switch to light mode");
    }
}
