// SPDX-License-Identifier: MPL-2.0
//! Audio and subtitle track value types.

use super::resource::ResourceHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of selectable tracks. Ids are unique per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Subtitle,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Audio => write!(f, "audio"),
            TrackKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// An alternate audio stream of the current media.
///
/// Audio tracks come from the manifest at startup and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    id: String,
    language_code: String,
    label: String,
    #[serde(default)]
    is_default: bool,
}

impl AudioTrack {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        language_code: impl Into<String>,
        label: impl Into<String>,
        is_default: bool,
    ) -> Self {
        Self {
            id: id.into(),
            language_code: language_code.into(),
            label: label.into(),
            is_default,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A subtitle stream, either shipped with the media or uploaded at runtime.
///
/// The track owns its [`ResourceHandle`]; dropping the track releases it.
#[derive(Debug)]
pub struct SubtitleTrack {
    id: String,
    language_code: String,
    label: String,
    source: Option<ResourceHandle>,
    is_external: bool,
}

impl SubtitleTrack {
    /// Creates a built-in track backed by a host locator (or no source at all).
    #[must_use]
    pub fn builtin(
        id: impl Into<String>,
        language_code: impl Into<String>,
        label: impl Into<String>,
        source: Option<ResourceHandle>,
    ) -> Self {
        Self {
            id: id.into(),
            language_code: language_code.into(),
            label: label.into(),
            source,
            is_external: false,
        }
    }

    /// Creates an uploaded track that takes ownership of the file content.
    #[must_use]
    pub fn external(
        id: impl Into<String>,
        language_code: impl Into<String>,
        label: impl Into<String>,
        source: ResourceHandle,
    ) -> Self {
        Self {
            id: id.into(),
            language_code: language_code.into(),
            label: label.into(),
            source: Some(source),
            is_external: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn source(&self) -> Option<&ResourceHandle> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Returns a plain snapshot of this track for rendering.
    #[must_use]
    pub fn info(&self) -> SubtitleTrackInfo {
        SubtitleTrackInfo {
            id: self.id.clone(),
            language_code: self.language_code.clone(),
            label: self.label.clone(),
            locator: self.source.as_ref().map(|s| s.locator_str().to_string()),
            is_external: self.is_external,
        }
    }
}

/// Immutable, cloneable view of a [`SubtitleTrack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleTrackInfo {
    pub id: String,
    pub language_code: String,
    pub label: String,
    pub locator: Option<String>,
    pub is_external: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_kind_displays_lowercase() {
        assert_eq!(TrackKind::Audio.to_string(), "audio");
        assert_eq!(TrackKind::Subtitle.to_string(), "subtitle");
    }

    #[test]
    fn external_track_owns_source() {
        let track = SubtitleTrack::external(
            "custom-1",
            "custom",
            "movie",
            ResourceHandle::from_bytes("blob:movie", b"1\n".to_vec()),
        );
        assert!(track.is_external());
        assert_eq!(track.source().map(ResourceHandle::len), Some(2));
    }

    #[test]
    fn info_copies_visible_fields() {
        let track = SubtitleTrack::builtin(
            "fr",
            "fr",
            "Français",
            Some(ResourceHandle::locator("/subtitles/fr.vtt")),
        );
        let info = track.info();
        assert_eq!(info.id, "fr");
        assert_eq!(info.label, "Français");
        assert_eq!(info.locator.as_deref(), Some("/subtitles/fr.vtt"));
        assert!(!info.is_external);
    }

    #[test]
    fn audio_track_deserializes_without_default_flag() {
        let track: AudioTrack =
            toml::from_str("id = \"de\"\nlanguage_code = \"de\"\nlabel = \"Deutsch\"\n")
                .expect("valid audio track");
        assert!(!track.is_default());
        assert_eq!(track.label(), "Deutsch");
    }
}
