// SPDX-License-Identifier: MPL-2.0
//! Built-in track manifest.
//!
//! The manifest lists the tracks known before any upload happens. It can be
//! deserialized from TOML so hosts can ship it alongside the media.

use super::resource::ResourceHandle;
use super::types::{AudioTrack, SubtitleTrack};
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Manifest entry for a built-in subtitle track.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuiltinSubtitle {
    pub id: String,
    pub language_code: String,
    pub label: String,
    #[serde(default)]
    pub locator: Option<String>,
}

impl BuiltinSubtitle {
    fn into_track(self) -> SubtitleTrack {
        SubtitleTrack::builtin(
            self.id,
            self.language_code,
            self.label,
            self.locator.map(ResourceHandle::locator),
        )
    }
}

/// Tracks available at catalog initialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TrackManifest {
    #[serde(default)]
    pub audio: Vec<AudioTrack>,
    #[serde(default)]
    pub subtitles: Vec<BuiltinSubtitle>,
}

impl TrackManifest {
    /// The stock manifest: English, French, German and Arabic for both kinds,
    /// English audio flagged as default.
    #[must_use]
    pub fn stock() -> Self {
        const LANGUAGES: &[(&str, &str)] = &[
            ("en", "English"),
            ("fr", "Français"),
            ("de", "Deutsch"),
            ("ar", "العربية"),
        ];

        Self {
            audio: LANGUAGES
                .iter()
                .map(|(code, label)| AudioTrack::new(*code, *code, *label, *code == "en"))
                .collect(),
            subtitles: LANGUAGES
                .iter()
                .map(|(code, label)| BuiltinSubtitle {
                    id: (*code).to_string(),
                    language_code: (*code).to_string(),
                    label: (*label).to_string(),
                    locator: None,
                })
                .collect(),
        }
    }

    /// Parses a manifest from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Splits the manifest into owned tracks ready for the catalog.
    #[must_use]
    pub fn into_tracks(self) -> (Vec<AudioTrack>, Vec<SubtitleTrack>) {
        let subtitles = self
            .subtitles
            .into_iter()
            .map(BuiltinSubtitle::into_track)
            .collect();
        (self.audio, subtitles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_manifest_flags_english_audio_as_default() {
        let manifest = TrackManifest::stock();
        let defaults: Vec<_> = manifest
            .audio
            .iter()
            .filter(|t| t.is_default())
            .map(AudioTrack::id)
            .collect();
        assert_eq!(defaults, vec!["en"]);
        assert_eq!(manifest.subtitles.len(), 4);
    }

    #[test]
    fn manifest_parses_from_toml() {
        let text = r#"
            [[audio]]
            id = "main"
            language_code = "en"
            label = "Main"
            is_default = true

            [[subtitles]]
            id = "en-cc"
            language_code = "en"
            label = "English CC"
            locator = "/subs/en-cc.vtt"
        "#;
        let manifest: TrackManifest = toml::from_str(text).expect("valid manifest");
        let (audio, subtitles) = manifest.into_tracks();
        assert_eq!(audio.len(), 1);
        assert_eq!(subtitles[0].id(), "en-cc");
        assert_eq!(
            subtitles[0].source().map(ResourceHandle::locator_str),
            Some("/subs/en-cc.vtt")
        );
        assert!(!subtitles[0].is_external());
    }
}
