//! Theme mode and the persisted theme store.
//!
//! - [`mode`]: The [`ThemeMode`] flag
//! - [`store`]: [`ThemeStore`] with init/get/toggle over an injected
//!   [`crate::storage::PreferenceStore`]

pub mod mode;
pub mod store;

pub use mode::ThemeMode;
pub use store::{ThemeStore, DEFAULT_PREFERENCE_KEY};
