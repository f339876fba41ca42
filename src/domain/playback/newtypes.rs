// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_CONTROLS_HIDE_DELAY_MS, DEFAULT_SEEK_STEP_SECS, DEFAULT_VOLUME,
    MAX_CONTROLS_HIDE_DELAY_MS, MAX_SEEK_STEP_SECS, MAX_VOLUME, MIN_CONTROLS_HIDE_DELAY_MS,
    MIN_SEEK_STEP_SECS, MIN_VOLUME,
};
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use insync_player::domain::playback::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// assert_eq!(Volume::new(-1.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Silence.
    pub const MUTED: Self = Self(MIN_VOLUME);

    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN is treated as silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::MUTED;
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is zero.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 <= MIN_VOLUME
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Skip distance for the arrow keys and skip buttons, in seconds (1–60).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f64);

impl SeekStep {
    /// Creates a new seek step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SeekStep {
    fn default() -> Self {
        Self(DEFAULT_SEEK_STEP_SECS)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Inactivity delay before the controls hide while playing (500–30000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_CONTROLS_HIDE_DELAY_MS, MAX_CONTROLS_HIDE_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(DEFAULT_CONTROLS_HIDE_DELAY_MS)
    }
}
