//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (which owns rendering, the real clock and
//! the location bar) and the presentation engine. It follows a unidirectional
//! data flow:
//!
//! ```text
//! Host input → Event → handle_event → state mutations → Actions → host effects
//!                 ↑                                                      │
//!                 └──────────── Tick / PhaseComplete ────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`pages`]: View-local state of each routable page
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod pages;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use pages::{CommunityPage, HomePage, PageState, ProfileView};
pub use state::AppState;
