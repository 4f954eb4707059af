//! In-memory preference store.
//!
//! Used when no preference file is configured and as the substitutable fake in
//! tests. It can be switched into a failing mode to exercise the theme store's
//! swallow-and-continue handling of persistence errors.

use std::collections::HashMap;

use crate::domain::error::{DevHubError, Result};
use crate::storage::backend::PreferenceStore;

/// Preference slots held in a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slots: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    write_count: usize,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already populated.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.into(), value.into());
        store
    }

    /// Creates a store whose reads and writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Makes subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of writes that changed a stored value.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.write_count
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(DevHubError::Storage("preference store unavailable".to_string()));
        }
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(DevHubError::Storage(format!("refused write to {key}")));
        }
        if self.slots.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.write_count += 1;
        Ok(())
    }
}
