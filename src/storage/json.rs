//! JSON file-based preference store.
//!
//! The whole document is kept in memory and rewritten on every effective write
//! using write-to-temp + rename, so a crash never leaves a torn file behind.
//! Writes of an unchanged value do not touch the disk.

use crate::domain::error::{DevHubError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::{PreferenceData, PreferenceRecord};
use std::path::{Path, PathBuf};

/// JSON file preference backend, owned by the theme store on the event loop.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document, loaded on creation.
    data: PreferenceData,
}

impl JsonPreferenceStore {
    /// Creates or opens a preference file.
    ///
    /// Existing files are loaded; otherwise an empty document is used and the
    /// file is only created on the first write. Parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read or is not valid JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use devhub::storage::JsonPreferenceStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPreferenceStore::new(PathBuf::from("/tmp/devhub/preferences.json"))?;
    /// # Ok::<(), devhub::DevHubError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference file");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("preference file absent, starting empty");
            PreferenceData::default()
        };

        tracing::debug!(slot_count = data.slots.len(), "preference store ready");

        Ok(Self { file_path, data })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| DevHubError::Storage(format!("failed to parse preference file: {e}")))?;

        tracing::debug!(
            version = data.version,
            slots = data.slots.len(),
            "loaded preference data"
        );

        Ok(data)
    }

    /// Saves the document with an atomic rename.
    ///
    /// Each change gets exactly one save attempt. A failed save is not retried;
    /// the next effective write rewrites the whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename fails.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DevHubError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.slots.get(key).map(|record| record.value.clone()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_preference_write", key = %key, value = %value).entered();

        if self.data.slots.get(key).is_some_and(|record| record.value == value) {
            tracing::trace!("value unchanged, nothing to write");
            return Ok(());
        }

        self.data
            .slots
            .insert(key.to_string(), PreferenceRecord::new(value));
        self.save_to_file()
    }
}
