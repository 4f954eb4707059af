//! Route transition sequencing.
//!
//! - [`coordinator`]: The exit-then-enter phase machine ([`TransitionCoordinator`])
//! - [`scheduler`]: Host-clocked timer queue that turns scheduled phases into
//!   completions ([`FrameScheduler`])

pub mod coordinator;
pub mod scheduler;

pub use coordinator::{
    Completion, CoordinatorState, PhaseTicket, TransitionCoordinator, TransitionEffect,
    TransitionPhase,
};
pub use scheduler::{FrameScheduler, DEFAULT_PHASE_DURATION_MS};
