// SPDX-License-Identifier: MPL-2.0
//! Inputs accepted by a [`PlayerSession`](super::PlayerSession).

use crate::player::{KeyPress, ScheduledHide, TimerToken};

/// User intents coming from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    Play,
    Pause,
    /// Absolute seek in seconds.
    Seek(f64),
    /// Progress bar click, as a fraction of the duration.
    SeekToFraction(f64),
    SkipForward,
    SkipBackward,
    SetVolume(f32),
    ToggleMute,
    ToggleFullscreen,
    SelectAudioTrack(String),
    /// `None` turns subtitles off.
    SelectSubtitleTrack(Option<String>),
    ToggleSubtitles,
    RemoveSubtitleTrack(String),
    KeyDown(KeyPress),
    /// Pointer moved or clicked over the player surface.
    PointerActivity,
    PointerLeave,
}

/// Callbacks from the host media element and the hide scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    MetadataLoaded { duration_secs: f64 },
    TimeUpdate { current_time_secs: f64 },
    Played,
    Paused,
    FullscreenChanged(bool),
    HideDeadline(TimerToken),
}

/// What the host has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Suppress the platform default for the triggering input (page scroll).
    pub prevent_default: bool,
    /// A new hide deadline to schedule, replacing any earlier one.
    pub scheduled_hide: Option<ScheduledHide>,
}
