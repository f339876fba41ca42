// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player core. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Audio volume bounds and the unmute level
//! - **Seek**: Keyboard skip step
//! - **Controls**: Auto-hide delay for the control surface
//! - **Uploads**: Size ceilings for user-supplied files
//! - **Language**: Supported UI languages and the fallback

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Initial volume for a new session (host media elements start at full volume).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Level restored by unmute when no previous level is kept.
pub const UNMUTE_VOLUME: f32 = 1.0;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default skip distance for the arrow keys and skip buttons (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum skip distance (in seconds).
pub const MIN_SEEK_STEP_SECS: f64 = 1.0;

/// Maximum skip distance (in seconds).
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default inactivity delay before the controls hide while playing (in milliseconds).
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3000;

/// Minimum hide delay (in milliseconds).
pub const MIN_CONTROLS_HIDE_DELAY_MS: u64 = 500;

/// Maximum hide delay (in milliseconds).
pub const MAX_CONTROLS_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Subtitle uploads carry no size ceiling unless the host imposes one.
pub const DEFAULT_MAX_SUBTITLE_BYTES: Option<u64> = None;

/// Size ceiling for user-picked video sources (500 MiB).
pub const DEFAULT_MAX_VIDEO_BYTES: u64 = 500 * 1024 * 1024;

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Preference key under which the UI language is persisted.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Language used when nothing else resolves.
pub const DEFAULT_LANGUAGE: &str = "en";

/// UI languages the shell ships labels for.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "fr", "de", "ar"];

/// Languages written right-to-left.
pub const RTL_LANGUAGES: &[&str] = &["ar"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(UNMUTE_VOLUME > MIN_VOLUME);
    assert!(UNMUTE_VOLUME <= MAX_VOLUME);

    // Seek step validation
    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(MAX_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);

    // Controls validation
    assert!(MIN_CONTROLS_HIDE_DELAY_MS > 0);
    assert!(MAX_CONTROLS_HIDE_DELAY_MS >= MIN_CONTROLS_HIDE_DELAY_MS);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS >= MIN_CONTROLS_HIDE_DELAY_MS);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS <= MAX_CONTROLS_HIDE_DELAY_MS);

    // Upload validation
    assert!(DEFAULT_MAX_VIDEO_BYTES > 0);

    // Language validation
    assert!(!SUPPORTED_LANGUAGES.is_empty());
};
