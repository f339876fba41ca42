// SPDX-License-Identifier: MPL-2.0
//! Auto-hide policy for the on-screen controls.
//!
//! Controls show on any activity. While playing, a single deadline
//! `hide_delay` after the latest activity hides them again; while paused
//! they stay up. Leaving the player surface hides them immediately.
//!
//! Time is passed in explicitly. Hosts either schedule a callback for the
//! returned [`ScheduledHide`] and report it back through
//! [`ControlVisibilityTimer::on_deadline`], or call
//! [`ControlVisibilityTimer::tick`] periodically.

use super::timer::{SingleSlotTimer, TimerToken};
use crate::domain::playback::HideDelay;
use std::time::Instant;

/// A hide deadline the host should schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHide {
    pub token: TimerToken,
    pub deadline: Instant,
}

/// Plain snapshot of the visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilitySnapshot {
    pub controls_visible: bool,
    pub pending_hide_deadline: Option<Instant>,
}

/// Single writer of the controls-visible flag.
#[derive(Debug)]
pub struct ControlVisibilityTimer {
    controls_visible: bool,
    playing: bool,
    hide_delay: HideDelay,
    timer: SingleSlotTimer,
}

impl ControlVisibilityTimer {
    /// Controls start visible with playback paused.
    #[must_use]
    pub fn new(hide_delay: HideDelay) -> Self {
        Self {
            controls_visible: true,
            playing: false,
            hide_delay,
            timer: SingleSlotTimer::new(),
        }
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn hide_delay(&self) -> HideDelay {
        self.hide_delay
    }

    #[must_use]
    pub fn snapshot(&self) -> VisibilitySnapshot {
        VisibilitySnapshot {
            controls_visible: self.controls_visible,
            pending_hide_deadline: self.timer.deadline(),
        }
    }

    /// Pointer movement, clicks, key presses.
    ///
    /// Shows the controls and, while playing, re-arms the hide deadline.
    pub fn notify_activity(&mut self, now: Instant) -> Option<ScheduledHide> {
        self.controls_visible = true;
        if !self.playing {
            return None;
        }
        let deadline = now + self.hide_delay.as_duration();
        let token = self.timer.arm(deadline);
        tracing::trace!(?deadline, "controls hide re-armed");
        Some(ScheduledHide { token, deadline })
    }

    /// The pointer left the player surface.
    pub fn notify_pointer_leave(&mut self) {
        self.timer.cancel();
        self.controls_visible = false;
    }

    /// Playback started or stopped.
    ///
    /// Pausing cancels any pending hide and forces the controls visible.
    pub fn notify_playback_state_change(&mut self, is_playing: bool) {
        let was_playing = std::mem::replace(&mut self.playing, is_playing);
        if was_playing && !is_playing {
            self.timer.cancel();
            self.controls_visible = true;
        }
    }

    /// A scheduled hide callback arrived. Stale tokens are ignored.
    ///
    /// Returns true if the controls were hidden.
    pub fn on_deadline(&mut self, token: TimerToken) -> bool {
        if self.timer.fire(token) {
            self.controls_visible = false;
            true
        } else {
            false
        }
    }

    /// Expires the pending deadline if it is due at `now`.
    ///
    /// Returns true if the controls were hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.controls_visible = false;
            true
        } else {
            false
        }
    }

    /// Cancels any pending deadline. Call before discarding the timer.
    pub fn teardown(&mut self) {
        self.timer.cancel();
    }
}

impl Default for ControlVisibilityTimer {
    fn default() -> Self {
        Self::new(HideDelay::default())
    }
}
