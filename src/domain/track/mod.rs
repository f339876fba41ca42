// SPDX-License-Identifier: MPL-2.0
//! Track domain types.
//!
//! Audio and subtitle tracks, the owned resources behind uploaded
//! subtitles, and the manifest of built-in tracks.

pub mod manifest;
pub mod resource;
pub mod types;

pub use manifest::{BuiltinSubtitle, TrackManifest};
pub use resource::ResourceHandle;
pub use types::{AudioTrack, SubtitleTrack, SubtitleTrackInfo, TrackKind};
