//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait, the persistence
//! collaborator injected into [`crate::theme::ThemeStore`]. It is a named-slot
//! string store and nothing more: the theme store owns the meaning of the values.

use crate::domain::error::Result;

/// Abstraction over persisted preference backends.
///
/// # Implementations
///
/// - [`crate::storage::JsonPreferenceStore`]: JSON file with atomic writes
/// - [`crate::storage::MemoryPreferenceStore`]: in-memory fake, optionally failing
///
/// # Examples
///
/// ```
/// use devhub::storage::{MemoryPreferenceStore, PreferenceStore};
///
/// let mut store = MemoryPreferenceStore::new();
/// store.write("devhub-theme", "light")?;
/// assert_eq!(store.read("devhub-theme")?, Some("light".to_string()));
/// # Ok::<(), devhub::DevHubError>(())
/// ```
pub trait PreferenceStore: Send + std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`.
    ///
    /// Writing the value already stored must be a no-op in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses or fails the write.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
