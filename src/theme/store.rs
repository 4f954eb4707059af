//! Theme store with a persisted preference.
//!
//! [`ThemeStore`] is the single owner of the current [`ThemeMode`]. It reads the
//! persisted slot once at startup and writes the resolved mode back on init and
//! on every toggle. Persistence failures never reach the caller: they are logged
//! and the in-memory mode stays authoritative for the session.

use crate::storage::PreferenceStore;

use super::mode::ThemeMode;

/// Default name of the persisted preference slot.
pub const DEFAULT_PREFERENCE_KEY: &str = "devhub-theme";

/// Holds the current display mode and its persistence collaborator.
///
/// The store is generic over the backend so tests can inspect a concrete fake;
/// the application uses `ThemeStore<Box<dyn PreferenceStore>>`.
///
/// # Example
///
/// ```
/// use devhub::storage::MemoryPreferenceStore;
/// use devhub::theme::{ThemeMode, ThemeStore};
///
/// let mut theme = ThemeStore::new(MemoryPreferenceStore::with_value("devhub-theme", "neon"), "devhub-theme");
/// assert_eq!(theme.init(), ThemeMode::Dark);
/// assert_eq!(theme.toggle(), ThemeMode::Light);
/// assert_eq!(theme.get(), ThemeMode::Light);
/// ```
#[derive(Debug)]
pub struct ThemeStore<S: PreferenceStore> {
    store: S,
    key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Creates a store in [`ThemeMode::Dark`]; call [`ThemeStore::init`] to load
    /// the persisted preference.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            mode: ThemeMode::default(),
        }
    }

    /// Reads the persisted slot and resolves the startup mode.
    ///
    /// Missing, unreadable or invalid values resolve to [`ThemeMode::Dark`]. The
    /// resolved mode is written back so the slot always holds a valid value.
    pub fn init(&mut self) -> ThemeMode {
        let _span = tracing::debug_span!("theme_init", key = %self.key).entered();

        let persisted = match self.store.read(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference, using default");
                None
            }
        };

        self.mode = ThemeMode::from_persisted(persisted.as_deref());
        if persisted.is_some() && persisted.as_deref() != Some(self.mode.as_str()) {
            tracing::debug!(persisted = ?persisted, "invalid theme preference replaced by default");
        }

        self.persist();
        tracing::debug!(mode = %self.mode, "theme initialized");
        self.mode
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn get(&self) -> ThemeMode {
        self.mode
    }

    /// Flips Dark↔Light, persists the new mode and returns it.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "theme toggled");
        self.persist();
        self.mode
    }

    /// Name of the persisted slot.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persistence collaborator.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.write(&self.key, self.mode.as_str()) {
            tracing::warn!(
                error = %e,
                mode = %self.mode,
                "failed to persist theme preference, keeping in-memory mode"
            );
        }
    }
}
