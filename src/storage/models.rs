//! On-disk record models for the preference file.
//!
//! These types describe the JSON document written by
//! [`crate::storage::JsonPreferenceStore`]; they are separate from the values the
//! theme store reasons about.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current version of the preference file format.
pub const PREFERENCE_FORMAT_VERSION: u32 = 1;

/// Top-level preference document.
///
/// ```json
/// {
///   "version": 1,
///   "slots": {
///     "devhub-theme": { "value": "light", "updated_at": 1760000000 }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceData {
    /// Version of the file format for future migrations.
    pub version: u32,

    /// Named slots, ordered by key so the file diffs cleanly.
    #[serde(default)]
    pub slots: BTreeMap<String, PreferenceRecord>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: PREFERENCE_FORMAT_VERSION,
            slots: BTreeMap::new(),
        }
    }
}

/// A single persisted slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Stored string value.
    pub value: String,

    /// Unix timestamp of the last effective write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record stamped with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
