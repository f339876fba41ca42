// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types and rules shared by every component.
//!
//! # Modules
//!
//! - [`playback`]: Transport types ([`Volume`](playback::Volume),
//!   [`SeekStep`](playback::SeekStep), [`HideDelay`](playback::HideDelay),
//!   [`PlaybackSnapshot`](playback::PlaybackSnapshot))
//! - [`time`]: Time display formatting
//! - [`track`]: Track types ([`AudioTrack`](track::AudioTrack),
//!   [`SubtitleTrack`](track::SubtitleTrack), [`ResourceHandle`](track::ResourceHandle))

pub mod playback;
pub mod time;
pub mod track;
