// SPDX-License-Identifier: MPL-2.0
//! Single-slot cancellable deadline.
//!
//! At most one deadline is pending at a time. Arming again replaces the
//! previous deadline and bumps the token, so a callback scheduled for an
//! older deadline is recognized as stale when it arrives.

use std::time::Instant;

/// Identifies one arming of a [`SingleSlotTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A deadline slot with arm/cancel semantics.
#[derive(Debug, Default)]
pub struct SingleSlotTimer {
    generation: u64,
    pending: Option<(TimerToken, Instant)>,
}

impl SingleSlotTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot for `deadline`, replacing any pending deadline.
    pub fn arm(&mut self, deadline: Instant) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some((token, deadline));
        token
    }

    /// Cancels the pending deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns true if a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Consumes the pending deadline if `token` is the current one.
    ///
    /// Returns false for stale or cancelled tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some((current, _)) if current == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Consumes the pending deadline if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((_, deadline)) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
