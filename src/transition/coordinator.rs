//! Exit-then-enter sequencing of route views.
//!
//! The coordinator owns the single mounted view and its animation phase. It
//! never touches a clock: every phase it starts is returned as a
//! [`TransitionEffect::Schedule`] carrying a [`PhaseTicket`], and the host
//! reports completion by handing the ticket back to
//! [`TransitionCoordinator::on_phase_complete`].
//!
//! # State machine
//!
//! ```text
//!          route change                exit done                 enter done
//! Idle ─────────────────► Exiting ─────────────────► Entering ─────────────────► Idle
//!  ▲                        │  route change:            │  route change:
//!  │                        │  retarget, exit goes on   │  unmount, mount newest
//!  │                        └──────────┘                └──────────┘
//! ```
//!
//! At most one view is mounted at any time, so two views can never be
//! `Active` together. Route changes during a transition collapse to the newest
//! route; there is no backlog.

use std::fmt;

use crate::domain::RouteKey;

/// Identifies one scheduled phase. Completions carrying a superseded ticket
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhaseTicket(pub u64);

impl fmt::Display for PhaseTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle phase of a mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    Entering,
    Active,
    Exiting,
}

/// Where the coordinator is in the exit-then-enter sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorState {
    /// The mounted view is `Active`.
    Idle,
    /// The mounted view is playing its exit; `target` mounts once it completes.
    Exiting { target: RouteKey, ticket: PhaseTicket },
    /// The mounted view is playing its enter.
    Entering { ticket: PhaseTicket },
}

/// A view-lifecycle command for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Create a fresh instance of the view; its local state starts over.
    Mount(RouteKey),
    /// Destroy the view and its local state.
    Unmount(RouteKey),
    /// Start an animation phase and report `ticket` when it finishes.
    Schedule {
        key: RouteKey,
        ticket: PhaseTicket,
        phase: TransitionPhase,
    },
    /// Drop a scheduled completion that no longer matters.
    Cancel(PhaseTicket),
    /// The view finished entering and is now `Active`.
    Activate(RouteKey),
}

/// Outcome of reporting a phase completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied(Vec<TransitionEffect>),
    /// The ticket belonged to a superseded phase; nothing changed.
    Stale,
}

/// Sequences route views so that only one is live at a time.
#[derive(Debug, Clone)]
pub struct TransitionCoordinator {
    mounted: RouteKey,
    state: CoordinatorState,
    next_ticket: u64,
}

impl TransitionCoordinator {
    /// Starts idle with `initial` mounted and `Active`.
    #[must_use]
    pub fn new(initial: RouteKey) -> Self {
        Self {
            mounted: initial,
            state: CoordinatorState::Idle,
            next_ticket: 1,
        }
    }

    /// Requests a transition to `target`.
    ///
    /// - Idle on another route: the mounted view starts exiting.
    /// - Exiting: the pending target is replaced; the running exit continues.
    /// - Entering: the entering view is unmounted and `target` is mounted
    ///   and starts entering immediately.
    ///
    /// Requesting the route that is already mounted (while idle or entering)
    /// or already pending is a no-op.
    pub fn on_route_change(&mut self, target: RouteKey) -> Vec<TransitionEffect> {
        let _span = tracing::debug_span!(
            "transition_route_change",
            mounted = %self.mounted,
            target = %target
        )
        .entered();

        match &mut self.state {
            CoordinatorState::Idle => {
                if target == self.mounted {
                    tracing::debug!("route already active");
                    return vec![];
                }
                let ticket = self.issue_ticket();
                let effect = TransitionEffect::Schedule {
                    key: self.mounted.clone(),
                    ticket,
                    phase: TransitionPhase::Exiting,
                };
                self.state = CoordinatorState::Exiting { target, ticket };
                tracing::debug!(%ticket, "exit started");
                vec![effect]
            }
            CoordinatorState::Exiting { target: pending, .. } => {
                if *pending == target {
                    return vec![];
                }
                tracing::debug!(previous = %pending, "pending target replaced");
                *pending = target;
                vec![]
            }
            CoordinatorState::Entering { ticket: cancelled } => {
                if target == self.mounted {
                    return vec![];
                }
                let cancelled = *cancelled;
                let previous = std::mem::replace(&mut self.mounted, target);
                tracing::debug!(cancelled = %previous, "entering view interrupted");

                let mut effects = vec![
                    TransitionEffect::Cancel(cancelled),
                    TransitionEffect::Unmount(previous),
                ];
                effects.extend(self.begin_enter());
                effects
            }
        }
    }

    /// Reports that the phase identified by `ticket` finished.
    pub fn on_phase_complete(&mut self, ticket: PhaseTicket) -> Completion {
        match &self.state {
            CoordinatorState::Exiting { target, ticket: expected } if *expected == ticket => {
                let target = target.clone();
                let leaving = std::mem::replace(&mut self.mounted, target);
                tracing::debug!(%ticket, left = %leaving, entering = %self.mounted, "exit completed");

                let mut effects = vec![TransitionEffect::Unmount(leaving)];
                effects.extend(self.begin_enter());
                Completion::Applied(effects)
            }
            CoordinatorState::Entering { ticket: expected } if *expected == ticket => {
                self.state = CoordinatorState::Idle;
                tracing::debug!(%ticket, active = %self.mounted, "enter completed");
                Completion::Applied(vec![TransitionEffect::Activate(self.mounted.clone())])
            }
            _ => {
                tracing::debug!(%ticket, state = ?self.state, "ignoring stale phase completion");
                Completion::Stale
            }
        }
    }

    /// The `Active` view, if no transition is running.
    #[must_use]
    pub fn active(&self) -> Option<&RouteKey> {
        matches!(self.state, CoordinatorState::Idle).then_some(&self.mounted)
    }

    /// The single mounted view, whatever its phase.
    #[must_use]
    pub const fn mounted(&self) -> &RouteKey {
        &self.mounted
    }

    /// Phase of `key`, or `None` if it is not mounted.
    #[must_use]
    pub fn phase_of(&self, key: &RouteKey) -> Option<TransitionPhase> {
        (*key == self.mounted).then(|| self.mounted_phase())
    }

    /// Every mounted view with its phase.
    #[must_use]
    pub fn views(&self) -> Vec<(RouteKey, TransitionPhase)> {
        vec![(self.mounted.clone(), self.mounted_phase())]
    }

    #[must_use]
    pub const fn state(&self) -> &CoordinatorState {
        &self.state
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, CoordinatorState::Idle)
    }

    /// Ticket of the phase currently awaited, if any.
    #[must_use]
    pub const fn pending_ticket(&self) -> Option<PhaseTicket> {
        match &self.state {
            CoordinatorState::Idle => None,
            CoordinatorState::Exiting { ticket, .. } | CoordinatorState::Entering { ticket } => {
                Some(*ticket)
            }
        }
    }

    /// The route the coordinator is settling on.
    #[must_use]
    pub const fn current_target(&self) -> &RouteKey {
        match &self.state {
            CoordinatorState::Exiting { target, .. } => target,
            CoordinatorState::Idle | CoordinatorState::Entering { .. } => &self.mounted,
        }
    }

    const fn mounted_phase(&self) -> TransitionPhase {
        match self.state {
            CoordinatorState::Idle => TransitionPhase::Active,
            CoordinatorState::Exiting { .. } => TransitionPhase::Exiting,
            CoordinatorState::Entering { .. } => TransitionPhase::Entering,
        }
    }

    /// Mounts `self.mounted` fresh and schedules its enter phase.
    fn begin_enter(&mut self) -> [TransitionEffect; 2] {
        let ticket = self.issue_ticket();
        self.state = CoordinatorState::Entering { ticket };
        [
            TransitionEffect::Mount(self.mounted.clone()),
            TransitionEffect::Schedule {
                key: self.mounted.clone(),
                ticket,
                phase: TransitionPhase::Entering,
            },
        ]
    }

    fn issue_ticket(&mut self) -> PhaseTicket {
        let ticket = PhaseTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> RouteKey {
        RouteKey::from(path)
    }

    fn scheduled(effects: &[TransitionEffect]) -> PhaseTicket {
        effects
            .iter()
            .find_map(|e| match e {
                TransitionEffect::Schedule { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("effects should schedule a phase")
    }

    fn applied(completion: Completion) -> Vec<TransitionEffect> {
        match completion {
            Completion::Applied(effects) => effects,
            Completion::Stale => panic!("completion unexpectedly stale"),
        }
    }

    #[test]
    fn full_cycle_exits_then_enters() {
        let mut coordinator = TransitionCoordinator::new(key("/"));
        assert_eq!(coordinator.active(), Some(&key("/")));

        let exit = scheduled(&coordinator.on_route_change(key("/projects")));
        assert_eq!(coordinator.phase_of(&key("/")), Some(TransitionPhase::Exiting));
        assert_eq!(coordinator.active(), None);
        assert_eq!(coordinator.current_target(), &key("/projects"));

        let effects = applied(coordinator.on_phase_complete(exit));
        assert_eq!(effects[0], TransitionEffect::Unmount(key("/")));
        assert_eq!(effects[1], TransitionEffect::Mount(key("/projects")));
        assert_eq!(coordinator.phase_of(&key("/")), None);
        assert_eq!(coordinator.phase_of(&key("/projects")), Some(TransitionPhase::Entering));

        let enter = scheduled(&effects);
        let effects = applied(coordinator.on_phase_complete(enter));
        assert_eq!(effects, vec![TransitionEffect::Activate(key("/projects"))]);
        assert!(coordinator.is_idle());
        assert_eq!(coordinator.active(), Some(&key("/projects")));
    }

    #[test]
    fn same_route_is_a_noop() {
        let mut coordinator = TransitionCoordinator::new(key("/about"));
        assert!(coordinator.on_route_change(key("/about")).is_empty());
        assert!(coordinator.is_idle());

        coordinator.on_route_change(key("/contact"));
        let ticket = coordinator.pending_ticket();
        assert!(coordinator.on_route_change(key("/contact")).is_empty());
        assert_eq!(coordinator.pending_ticket(), ticket);
    }

    #[test]
    fn retarget_while_exiting_keeps_exit_running() {
        let mut coordinator = TransitionCoordinator::new(key("/"));
        let exit = scheduled(&coordinator.on_route_change(key("/developers")));
        assert!(coordinator.on_route_change(key("/projects")).is_empty());
        assert_eq!(coordinator.pending_ticket(), Some(exit));

        let effects = applied(coordinator.on_phase_complete(exit));
        assert!(effects.contains(&TransitionEffect::Mount(key("/projects"))));
        assert!(!effects.contains(&TransitionEffect::Mount(key("/developers"))));
    }

    #[test]
    fn route_change_while_entering_replaces_entering_view() {
        let mut coordinator = TransitionCoordinator::new(key("/"));
        let exit = scheduled(&coordinator.on_route_change(key("/developers")));
        let enter = scheduled(&applied(coordinator.on_phase_complete(exit)));

        let effects = coordinator.on_route_change(key("/community"));
        assert_eq!(effects[0], TransitionEffect::Cancel(enter));
        assert_eq!(effects[1], TransitionEffect::Unmount(key("/developers")));
        assert_eq!(effects[2], TransitionEffect::Mount(key("/community")));
        assert_eq!(coordinator.views(), vec![(key("/community"), TransitionPhase::Entering)]);

        assert_eq!(coordinator.on_phase_complete(enter), Completion::Stale);
        let fresh = scheduled(&effects);
        applied(coordinator.on_phase_complete(fresh));
        assert_eq!(coordinator.active(), Some(&key("/community")));
    }

    #[test]
    fn completions_while_idle_are_stale() {
        let mut coordinator = TransitionCoordinator::new(key("/"));
        assert_eq!(coordinator.on_phase_complete(PhaseTicket(1)), Completion::Stale);
        assert_eq!(coordinator.active(), Some(&key("/")));
    }

    #[test]
    fn dropped_callback_leaves_last_phase() {
        let mut coordinator = TransitionCoordinator::new(key("/"));
        let exit = scheduled(&coordinator.on_route_change(key("/about")));
        assert_eq!(
            coordinator.on_phase_complete(PhaseTicket(exit.0 + 100)),
            Completion::Stale
        );
        assert_eq!(coordinator.views(), vec![(key("/"), TransitionPhase::Exiting)]);
        assert_eq!(coordinator.pending_ticket(), Some(exit));
    }
}
