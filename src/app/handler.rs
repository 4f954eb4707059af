//! Event handling and state transition logic.
//!
//! All presentation state changes happen here, one event at a time. The
//! handler never blocks and never fails: conditions such as unknown routes,
//! stale phase tickets or input aimed at a view that is leaving are ignored
//! and logged at `debug`.
//!
//! # Event Types
//!
//! - **Location**: `Navigate`, `Scroll`
//! - **Time**: `Tick`, `PhaseComplete`
//! - **Chrome**: `ToggleTheme`, `ToggleMobileMenu`
//! - **Page input**: `SearchInput`, `SelectFacet`, `ToggleLike`, `ToggleFollow`
//!
//! # Example
//!
//! ```
//! use devhub::app::{handle_event, Event};
//! use devhub::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! let navigate = Event::Navigate { path: "/projects".into(), now_ms: 0 };
//! let (render, actions) = handle_event(&mut state, &navigate);
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! ```

use crate::app::{Action, AppState};
use crate::domain::{RecordId, Route, RouteKey};
use crate::transition::{Completion, PhaseTicket};

/// Discrete inputs from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The location changed to this path at host time `now_ms`.
    ///
    /// The exit phase is timed from `now_ms`, so a host that sleeps between
    /// frames still gets a full phase.
    Navigate { path: String, now_ms: u64 },

    /// The viewport scrolled to this vertical offset.
    Scroll { offset: u32 },

    /// Host clock reading; fires every scheduled phase that is due.
    Tick { now_ms: u64 },

    /// The host finished the animation started for this ticket at `now_ms`.
    PhaseComplete { ticket: PhaseTicket, now_ms: u64 },

    ToggleTheme,
    ToggleMobileMenu,

    /// New search box contents on the mounted listing page.
    SearchInput(String),

    /// Facet chip selected on the mounted listing page.
    SelectFacet(String),

    /// Like button pressed on a feed post.
    ToggleLike(RecordId),

    /// Follow button pressed on the mounted profile page.
    ToggleFollow,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the visible state changed and the host should
/// re-render.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Navigate { path, now_ms } => {
            state.observe_clock(*now_ms);
            if Route::resolve(path).is_none() {
                tracing::debug!(path = %path, "ignoring navigation to unregistered path");
                return (false, vec![]);
            }

            let nav_changed = state.navigation.on_route_change(path);
            let effects = state.transitions.on_route_change(RouteKey::from(path.as_str()));
            let transition_changed = !effects.is_empty();
            let actions = state.apply_effects(effects);

            (nav_changed || transition_changed, actions)
        }
        Event::Scroll { offset } => (state.navigation.on_scroll(*offset), vec![]),
        Event::Tick { now_ms } => {
            let now = state.observe_clock(*now_ms);
            let fired = state.scheduler.advance(now);
            if !fired.is_empty() {
                tracing::trace!(count = fired.len(), now_ms = now, "phases due");
            }

            let mut render = false;
            let mut actions = vec![];
            for ticket in fired {
                let (changed, mut more) = complete_phase(state, ticket);
                render |= changed;
                actions.append(&mut more);
            }
            (render, actions)
        }
        Event::PhaseComplete { ticket, now_ms } => {
            state.observe_clock(*now_ms);
            state.scheduler.discard(*ticket);
            complete_phase(state, *ticket)
        }
        Event::ToggleTheme => {
            let mode = state.theme.toggle();
            (true, vec![Action::ApplyTheme(mode)])
        }
        Event::ToggleMobileMenu => {
            let open = state.navigation.toggle_mobile_menu();
            tracing::debug!(open = open, "mobile menu toggled");
            (true, vec![])
        }
        Event::SearchInput(query) => {
            let changed = state
                .interactive_page_mut()
                .is_some_and(|page| page.set_query(query));
            (changed, vec![])
        }
        Event::SelectFacet(label) => {
            let changed = state
                .interactive_page_mut()
                .is_some_and(|page| page.select_facet(label));
            (changed, vec![])
        }
        Event::ToggleLike(id) => {
            let changed = state
                .interactive_page_mut()
                .and_then(|page| page.toggle_like(*id))
                .is_some();
            (changed, vec![])
        }
        Event::ToggleFollow => {
            let following = state.interactive_page_mut().and_then(|page| page.toggle_follow());
            if let Some(following) = following {
                tracing::debug!(following = following, "follow toggled");
            }
            (following.is_some(), vec![])
        }
    }
}

fn complete_phase(state: &mut AppState, ticket: PhaseTicket) -> (bool, Vec<Action>) {
    match state.transitions.on_phase_complete(ticket) {
        Completion::Applied(effects) => (true, state.apply_effects(effects)),
        Completion::Stale => (false, vec![]),
    }
}
