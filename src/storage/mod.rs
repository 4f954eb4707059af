//! Storage layer for the persisted theme preference.
//!
//! The only persisted state in DevHub is a single named preference slot. This
//! module provides the [`PreferenceStore`] abstraction and its backends.
//!
//! # Modules
//!
//! - `backend`: Storage trait for preference backends
//! - `json`: JSON file backend with atomic writes
//! - `memory`: In-memory backend used as default and as a test fake
//! - `models`: On-disk document types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use models::{PreferenceData, PreferenceRecord};
