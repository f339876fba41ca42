// SPDX-License-Identifier: MPL-2.0
//! Audio and subtitle selection state.
//!
//! The coordinator refers to tracks by id only; the catalog decides whether
//! an id exists. Subtitle selection and subtitle display are separate flags:
//! hiding subtitles keeps the remembered track so showing them again brings
//! back the same one.

use super::catalog::TrackCatalog;
use crate::domain::track::SubtitleTrack;
use crate::error::TrackError;

/// Plain snapshot of the selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    pub selected_audio_track_id: Option<String>,
    pub selected_subtitle_track_id: Option<String>,
    pub subtitles_enabled: bool,
}

impl SelectionSnapshot {
    /// The subtitle track that should be rendered right now, if any.
    #[must_use]
    pub fn visible_subtitle_track_id(&self) -> Option<&str> {
        if self.subtitles_enabled {
            self.selected_subtitle_track_id.as_deref()
        } else {
            None
        }
    }
}

/// Owner of "which audio track" and "which subtitle track, shown or not".
#[derive(Debug, Clone, Default)]
pub struct TrackSelectionCoordinator {
    state: SelectionSnapshot,
}

impl TrackSelectionCoordinator {
    /// Starts with the catalog's default audio track and subtitles off.
    #[must_use]
    pub fn new(catalog: &TrackCatalog) -> Self {
        Self {
            state: SelectionSnapshot {
                selected_audio_track_id: catalog
                    .default_audio_track()
                    .map(|track| track.id().to_string()),
                selected_subtitle_track_id: None,
                subtitles_enabled: false,
            },
        }
    }

    #[must_use]
    pub fn selected_audio_track_id(&self) -> Option<&str> {
        self.state.selected_audio_track_id.as_deref()
    }

    #[must_use]
    pub fn selected_subtitle_track_id(&self) -> Option<&str> {
        self.state.selected_subtitle_track_id.as_deref()
    }

    #[must_use]
    pub fn subtitles_enabled(&self) -> bool {
        self.state.subtitles_enabled
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.state.clone()
    }

    /// Selects an audio track.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] for unknown ids; the current
    /// selection is left unchanged.
    pub fn select_audio_track(
        &mut self,
        catalog: &TrackCatalog,
        id: &str,
    ) -> Result<(), TrackError> {
        let track = catalog.find_audio(id)?;
        self.state.selected_audio_track_id = Some(track.id().to_string());
        tracing::info!(id, "audio track selected");
        Ok(())
    }

    /// Selects a subtitle track and shows it, or turns subtitles off with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] for unknown ids; the current
    /// selection is left unchanged.
    pub fn select_subtitle_track(
        &mut self,
        catalog: &TrackCatalog,
        id: Option<&str>,
    ) -> Result<(), TrackError> {
        match id {
            None => {
                self.state.selected_subtitle_track_id = None;
                self.state.subtitles_enabled = false;
                tracing::info!("subtitles turned off");
            }
            Some(id) => {
                let track = catalog.find_subtitle(id)?;
                self.state.selected_subtitle_track_id = Some(track.id().to_string());
                self.state.subtitles_enabled = true;
                tracing::info!(id, "subtitle track selected");
            }
        }
        Ok(())
    }

    /// Flips subtitle display and returns the new state.
    ///
    /// Enabling with nothing selected picks the first subtitle track in
    /// catalog order; with an empty catalog subtitles stay disabled.
    /// Disabling keeps the selected id.
    pub fn toggle_subtitles_enabled(&mut self, catalog: &TrackCatalog) -> bool {
        if self.state.subtitles_enabled {
            self.state.subtitles_enabled = false;
            return false;
        }

        if self.state.selected_subtitle_track_id.is_none() {
            match catalog.subtitle_tracks().first() {
                Some(first) => {
                    self.state.selected_subtitle_track_id = Some(first.id().to_string());
                }
                None => return false,
            }
        }
        self.state.subtitles_enabled = true;
        true
    }

    /// Drops the subtitle selection if it points at `removed`.
    ///
    /// Returns true if the selection changed.
    pub fn forget_subtitle_track(&mut self, removed: &SubtitleTrack) -> bool {
        if self.state.selected_subtitle_track_id.as_deref() == Some(removed.id()) {
            self.state.selected_subtitle_track_id = None;
            self.state.subtitles_enabled = false;
            true
        } else {
            false
        }
    }
}
