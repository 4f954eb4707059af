//! Actions representing side effects for the rendering host.
//!
//! The event handler returns a `Vec<Action>` after each event. State changes
//! are already applied when an action is emitted; actions only tell the host
//! what it must do outside the engine, such as restyling the document or
//! starting an animation whose completion it will report back.

use crate::domain::RouteKey;
use crate::theme::ThemeMode;
use crate::transition::{PhaseTicket, TransitionPhase};

/// Commands the host executes after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply the display mode to every visual component.
    ApplyTheme(ThemeMode),

    /// Play the enter or exit animation of a mounted view.
    ///
    /// The host reports completion with `Event::PhaseComplete`, or lets
    /// the engine's own scheduler fire it on `Event::Tick`.
    StartAnimation {
        route: RouteKey,
        phase: TransitionPhase,
        ticket: PhaseTicket,
    },
}
