// SPDX-License-Identifier: MPL-2.0
//! Transport state as seen by the presentation layer.

use super::newtypes::Volume;
use crate::domain::time::format_time;

/// Coarse transport phase.
///
/// `Loading` lasts from source attachment until the host reports metadata;
/// afterwards the phase follows the play/pause flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Loading,
    Paused,
    Playing,
}

impl PlaybackPhase {
    /// Returns true if media is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true while waiting for metadata.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Immutable snapshot of the transport state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub is_loading: bool,
    pub current_time_secs: f64,
    pub duration_secs: f64,
    pub volume: Volume,
    pub is_fullscreen: bool,
}

impl PlaybackSnapshot {
    /// Playback progress in percent (0 when the duration is unknown).
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.duration_secs > 0.0 {
            (self.current_time_secs / self.duration_secs * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Current position formatted for display.
    #[must_use]
    pub fn current_time_label(&self) -> String {
        format_time(self.current_time_secs)
    }

    /// Duration formatted for display.
    #[must_use]
    pub fn duration_label(&self) -> String {
        format_time(self.duration_secs)
    }

    /// Coarse phase derived from the flags.
    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        if self.is_loading {
            PlaybackPhase::Loading
        } else if self.is_playing {
            PlaybackPhase::Playing
        } else {
            PlaybackPhase::Paused
        }
    }
}
