// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed delivery of control hide deadlines.
//!
//! Holds at most one sleeping task. Scheduling a new hide aborts the
//! previous task, and dropping the scheduler aborts whatever is pending,
//! so no callback outlives the player.

use crate::player::{ScheduledHide, TimerToken};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sends the token of each expired hide deadline over a channel.
#[derive(Debug)]
pub struct HideScheduler {
    runtime: Handle,
    tx: mpsc::UnboundedSender<TimerToken>,
    pending: Option<JoinHandle<()>>,
}

impl HideScheduler {
    /// Creates a scheduler spawning on `runtime`, and the receiver of
    /// expired tokens. Feed them to the session's hide-deadline handler.
    #[must_use]
    pub fn channel(runtime: Handle) -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                runtime,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Replaces any pending deadline with `hide`.
    pub fn schedule(&mut self, hide: ScheduledHide) {
        self.cancel();
        let tx = self.tx.clone();
        let deadline = tokio::time::Instant::from_std(hide.deadline);
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the player is shutting down.
            let _ = tx.send(hide.token);
        }));
    }

    /// Aborts the pending deadline. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for HideScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
