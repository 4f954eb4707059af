//! Deterministic timer queue for animation phases.
//!
//! The host drives time explicitly: scheduled tickets fire from
//! [`FrameScheduler::advance`] once the supplied clock reaches their due time.
//! Nothing here reads the wall clock.

use std::collections::BTreeSet;

use super::coordinator::PhaseTicket;

/// Duration of one enter or exit phase.
pub const DEFAULT_PHASE_DURATION_MS: u64 = 400;

/// Pending phase completions ordered by due time.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    duration_ms: u64,
    queue: BTreeSet<(u64, PhaseTicket)>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_PHASE_DURATION_MS)
    }
}

impl FrameScheduler {
    #[must_use]
    pub const fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            queue: BTreeSet::new(),
        }
    }

    /// Queues `ticket` to fire one phase duration after `now_ms`. Returns the due time.
    pub fn schedule(&mut self, ticket: PhaseTicket, now_ms: u64) -> u64 {
        let due = now_ms.saturating_add(self.duration_ms);
        self.queue.insert((due, ticket));
        tracing::trace!(%ticket, due, "phase scheduled");
        due
    }

    /// Removes and returns every ticket due at or before `now_ms`, earliest first.
    pub fn advance(&mut self, now_ms: u64) -> Vec<PhaseTicket> {
        let pending = self.queue.split_off(&(now_ms.saturating_add(1), PhaseTicket(0)));
        let fired = std::mem::replace(&mut self.queue, pending);
        fired.into_iter().map(|(_, ticket)| ticket).collect()
    }

    /// Drops a queued ticket. Returns whether it was queued.
    pub fn discard(&mut self, ticket: PhaseTicket) -> bool {
        let before = self.queue.len();
        self.queue.retain(|(_, queued)| *queued != ticket);
        before != self.queue.len()
    }

    /// Due time of the earliest queued ticket.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.first().map(|(due, _)| *due)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}
