//! DevHub: presentation-state engine for a developer-community showcase site.
//!
//! DevHub owns the client-side state behind the site's pages:
//! - A display-mode theme store with a persisted preference
//! - Free-text search and facet filtering for the developer, project and
//!   community listings
//! - Navigation indicators, scroll state and the mobile menu
//! - Exit-then-enter route transitions with at most one live view
//! - Per-post like toggles and the profile follow toggle

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (renderer, clock, location bar)               │  ← Events in, Actions out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Mounted page state                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ theme/        │   │ filter/       │   │ transition/   │
//! │ storage/      │   │ feed/         │   │ navigation/   │
//! │ - Preference  │   │ - Listings    │   │ - Phases      │
//! │ - JSON file   │   │ - Likes       │   │ - Scheduler   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Records, routes, catalog, errors (domain/)       │
//! │  - Data directory paths (infrastructure/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber with rotating trace file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Records, routes, the catalog and errors
//! - [`feed`]: Like state of community posts
//! - [`filter`]: Search and facet filtering
//! - [`infrastructure`]: Data directory and path resolution
//! - [`navigation`]: Active indicator, scroll flag and mobile menu
//! - [`observability`]: Tracing subscriber setup
//! - [`storage`]: Persisted preference backends
//! - [`theme`]: Display mode and the theme store
//! - [`transition`]: Route transition sequencing
//! - [`ui`]: View model types
//!
//! # Configuration
//!
//! ```toml
//! preference_file = "preferences.json"
//! preference_key = "devhub-theme"
//! scroll_threshold = 20
//! phase_duration_ms = 400
//! trace_level = "debug"
//! trace_file = "devhub.log"
//! ```
//!
//! Relative file names are placed in the data directory (see
//! [`infrastructure::data_dir`]).
//!
//! # Example
//!
//! ```
//! use devhub::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, &Event::Navigate { path: "/developers".into(), now_ms: 0 });
//! handle_event(&mut state, &Event::Tick { now_ms: 400 });
//! handle_event(&mut state, &Event::Tick { now_ms: 800 });
//! handle_event(&mut state, &Event::SelectFacet("Rust".into()));
//!
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.view.map(|v| v.route.to_string()).as_deref(), Some("/developers"));
//! ```

pub mod app;
pub mod domain;
pub mod feed;
pub mod filter;
pub mod infrastructure;
pub mod navigation;
pub mod observability;
pub mod storage;
pub mod theme;
pub mod transition;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Catalog, DevHubError, Result, Route, RouteKey};
pub use theme::{ThemeMode, ThemeStore};

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::navigation::DEFAULT_SCROLL_THRESHOLD;
use crate::storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::theme::DEFAULT_PREFERENCE_KEY;
use crate::transition::{FrameScheduler, DEFAULT_PHASE_DURATION_MS};

/// Engine configuration.
///
/// Built from a host-supplied string map ([`Config::from_map`]) or a TOML
/// document ([`Config::from_toml_str`], [`Config::from_file`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File holding the persisted preference.
    ///
    /// `None` keeps the preference in memory for the session only.
    pub preference_file: Option<String>,

    /// Name of the persisted theme slot. Default: `"devhub-theme"`
    pub preference_key: String,

    /// Scroll offset past which the chrome switches style. Default: `20`
    pub scroll_threshold: u32,

    /// Duration of one enter or exit animation. Default: `400`
    pub phase_duration_ms: u64,

    /// Location mounted at startup. Default: `"/"`
    pub initial_path: String,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...).
    pub trace_level: Option<String>,

    /// File receiving trace output. Events go to stderr when unset.
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preference_file: None,
            preference_key: DEFAULT_PREFERENCE_KEY.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            phase_duration_ms: DEFAULT_PHASE_DURATION_MS,
            initial_path: "/".to_string(),
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// # Parsing Rules
    ///
    /// - Numeric values that fail to parse keep their defaults
    /// - Empty strings are treated as unset
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use devhub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("scroll_threshold".to_string(), "64".to_string());
    /// map.insert("phase_duration_ms".to_string(), "fast".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.scroll_threshold, 64);
    /// assert_eq!(config.phase_duration_ms, 400);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        Self {
            preference_file: text("preference_file").map(String::from),
            preference_key: text("preference_key").map_or(defaults.preference_key, String::from),
            scroll_threshold: text("scroll_threshold")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scroll_threshold),
            phase_duration_ms: text("phase_duration_ms")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.phase_duration_ms),
            initial_path: text("initial_path").map_or(defaults.initial_path, String::from),
            trace_level: text("trace_level").map(String::from),
            trace_file: text("trace_file").map(String::from),
        }
    }

    /// Parses configuration from a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DevHubError::Config`] if the document is not valid TOML or a
    /// value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| DevHubError::Config(format!("invalid config: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DevHubError::Io`] if the file cannot be read and
    /// [`DevHubError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Builds the application state from configuration.
///
/// - Installs tracing if `trace_level` or `trace_file` is set
/// - Loads the embedded catalog (an empty catalog if it is malformed)
/// - Opens the preference file, falling back to an in-memory store
/// - Resolves the persisted theme and mounts `initial_path`
///
/// Never fails: every problem is logged and replaced by a working default.
///
/// # Example
///
/// ```
/// use devhub::{initialize, Config, ThemeMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.theme.get(), ThemeMode::Dark);
/// assert!(state.transitions.is_idle());
/// ```
pub fn initialize(config: &Config) -> AppState {
    if config.trace_level.is_some() || config.trace_file.is_some() {
        observability::init_tracing(config);
    }

    let _span = tracing::debug_span!("initialize").entered();

    let catalog = Catalog::embedded().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load catalog, starting empty");
        Catalog::default()
    });

    let mut theme = ThemeStore::new(open_preference_store(config), config.preference_key.clone());
    theme.init();

    AppState::new(
        theme,
        catalog,
        &config.initial_path,
        config.scroll_threshold,
        FrameScheduler::new(config.phase_duration_ms),
    )
}

fn open_preference_store(config: &Config) -> Box<dyn PreferenceStore> {
    let Some(file) = config.preference_file.as_deref() else {
        return Box::new(MemoryPreferenceStore::new());
    };

    let path = infrastructure::resolve_data_path(file);
    match JsonPreferenceStore::new(path.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to open preference file, keeping preference in memory"
            );
            Box::new(MemoryPreferenceStore::new())
        }
    }
}
