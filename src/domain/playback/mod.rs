// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! This module contains playback-related value objects that are
//! independent of any host or presentation concerns.

pub mod newtypes;
pub mod state;

pub use newtypes::{HideDelay, SeekStep, Volume};
pub use state::{PlaybackPhase, PlaybackSnapshot};
