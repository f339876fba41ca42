// SPDX-License-Identifier: MPL-2.0
//! Track catalog: the single source of truth for which tracks exist.
//!
//! Ids are unique per kind for the lifetime of the catalog. Both sequences
//! keep insertion order, which is also the order the selectors list them in.
//! The catalog owns every subtitle track and therefore every uploaded
//! file's resource handle.

use crate::domain::track::{AudioTrack, SubtitleTrack, SubtitleTrackInfo, TrackKind, TrackManifest};
use crate::error::TrackError;

/// Borrowed reference to a track of either kind.
#[derive(Debug, Clone, Copy)]
pub enum TrackRef<'a> {
    Audio(&'a AudioTrack),
    Subtitle(&'a SubtitleTrack),
}

impl TrackRef<'_> {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            TrackRef::Audio(track) => track.id(),
            TrackRef::Subtitle(track) => track.id(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TrackKind {
        match self {
            TrackRef::Audio(_) => TrackKind::Audio,
            TrackRef::Subtitle(_) => TrackKind::Subtitle,
        }
    }
}

/// Ordered sets of audio and subtitle tracks.
#[derive(Debug, Default)]
pub struct TrackCatalog {
    audio: Vec<AudioTrack>,
    subtitles: Vec<SubtitleTrack>,
}

impl TrackCatalog {
    /// Seeds the catalog from the built-in tracks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::DuplicateId`] if either list repeats an id.
    pub fn initialize(
        builtin_audio: Vec<AudioTrack>,
        builtin_subtitles: Vec<SubtitleTrack>,
    ) -> Result<Self, TrackError> {
        let mut catalog = Self::default();
        for track in builtin_audio {
            if catalog.contains(TrackKind::Audio, track.id()) {
                return Err(TrackError::DuplicateId {
                    kind: TrackKind::Audio,
                    id: track.id().to_string(),
                });
            }
            catalog.audio.push(track);
        }
        for track in builtin_subtitles {
            catalog.add_subtitle_track(track)?;
        }
        tracing::debug!(
            audio = catalog.audio.len(),
            subtitles = catalog.subtitles.len(),
            "track catalog initialized"
        );
        Ok(catalog)
    }

    /// Seeds the catalog from a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::DuplicateId`] if the manifest repeats an id.
    pub fn from_manifest(manifest: TrackManifest) -> Result<Self, TrackError> {
        let (audio, subtitles) = manifest.into_tracks();
        Self::initialize(audio, subtitles)
    }

    /// Appends a subtitle track.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::DuplicateId`] if the id is already taken; the
    /// rejected track is dropped, releasing its resource.
    pub fn add_subtitle_track(&mut self, track: SubtitleTrack) -> Result<(), TrackError> {
        if self.contains(TrackKind::Subtitle, track.id()) {
            return Err(TrackError::DuplicateId {
                kind: TrackKind::Subtitle,
                id: track.id().to_string(),
            });
        }
        self.subtitles.push(track);
        Ok(())
    }

    /// Removes an uploaded subtitle track and hands it back to the caller.
    ///
    /// Dropping the returned track releases its resource.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] for unknown ids and
    /// [`TrackError::BuiltinTrack`] for tracks from the manifest.
    pub fn remove_subtitle_track(&mut self, id: &str) -> Result<SubtitleTrack, TrackError> {
        let index = self
            .subtitles
            .iter()
            .position(|track| track.id() == id)
            .ok_or_else(|| not_found(TrackKind::Subtitle, id))?;
        if !self.subtitles[index].is_external() {
            return Err(TrackError::BuiltinTrack {
                kind: TrackKind::Subtitle,
                id: id.to_string(),
            });
        }
        Ok(self.subtitles.remove(index))
    }

    #[must_use]
    pub fn audio_tracks(&self) -> &[AudioTrack] {
        &self.audio
    }

    #[must_use]
    pub fn subtitle_tracks(&self) -> &[SubtitleTrack] {
        &self.subtitles
    }

    /// Snapshots of every subtitle track, in catalog order.
    #[must_use]
    pub fn subtitle_infos(&self) -> Vec<SubtitleTrackInfo> {
        self.subtitles.iter().map(SubtitleTrack::info).collect()
    }

    /// Looks up a track by kind and id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] if no track of that kind has the id.
    pub fn find_by_id(&self, kind: TrackKind, id: &str) -> Result<TrackRef<'_>, TrackError> {
        match kind {
            TrackKind::Audio => self.find_audio(id).map(TrackRef::Audio),
            TrackKind::Subtitle => self.find_subtitle(id).map(TrackRef::Subtitle),
        }
    }

    /// Looks up an audio track by id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] if the id is unknown.
    pub fn find_audio(&self, id: &str) -> Result<&AudioTrack, TrackError> {
        self.audio
            .iter()
            .find(|track| track.id() == id)
            .ok_or_else(|| not_found(TrackKind::Audio, id))
    }

    /// Looks up a subtitle track by id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] if the id is unknown.
    pub fn find_subtitle(&self, id: &str) -> Result<&SubtitleTrack, TrackError> {
        self.subtitles
            .iter()
            .find(|track| track.id() == id)
            .ok_or_else(|| not_found(TrackKind::Subtitle, id))
    }

    /// Returns true if a track of `kind` with `id` exists.
    #[must_use]
    pub fn contains(&self, kind: TrackKind, id: &str) -> bool {
        match kind {
            TrackKind::Audio => self.audio.iter().any(|track| track.id() == id),
            TrackKind::Subtitle => self.subtitles.iter().any(|track| track.id() == id),
        }
    }

    /// The track flagged as default, else the first in catalog order.
    #[must_use]
    pub fn default_audio_track(&self) -> Option<&AudioTrack> {
        self.audio
            .iter()
            .find(|track| track.is_default())
            .or_else(|| self.audio.first())
    }

    /// Releases every uploaded subtitle track.
    ///
    /// Called at session end; built-in tracks are kept.
    pub fn release_external(&mut self) -> usize {
        let before = self.subtitles.len();
        self.subtitles.retain(|track| !track.is_external());
        let released = before - self.subtitles.len();
        if released > 0 {
            tracing::debug!(released, "released uploaded subtitle tracks");
        }
        released
    }
}

fn not_found(kind: TrackKind, id: &str) -> TrackError {
    TrackError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::track::ResourceHandle;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn audio(id: &str, is_default: bool) -> AudioTrack {
        AudioTrack::new(id, id, id.to_uppercase(), is_default)
    }

    fn builtin_sub(id: &str) -> SubtitleTrack {
        SubtitleTrack::builtin(id, id, id.to_uppercase(), None)
    }

    fn external_sub(id: &str) -> SubtitleTrack {
        SubtitleTrack::external(id, "custom", id, ResourceHandle::from_bytes(id, vec![1]))
    }

    #[test]
    fn initialize_preserves_insertion_order() {
        let catalog = TrackCatalog::initialize(
            vec![audio("en", true), audio("fr", false), audio("de", false)],
            vec![builtin_sub("fr"), builtin_sub("en")],
        )
        .expect("valid manifest");

        let audio_ids: Vec<_> = catalog.audio_tracks().iter().map(AudioTrack::id).collect();
        assert_eq!(audio_ids, vec!["en", "fr", "de"]);
        let sub_ids: Vec<_> = catalog
            .subtitle_tracks()
            .iter()
            .map(SubtitleTrack::id)
            .collect();
        assert_eq!(sub_ids, vec!["fr", "en"]);
    }

    #[test]
    fn initialize_rejects_duplicate_audio_ids() {
        let err = TrackCatalog::initialize(vec![audio("en", true), audio("en", false)], vec![])
            .expect_err("duplicate ids");
        assert_eq!(
            err,
            TrackError::DuplicateId {
                kind: TrackKind::Audio,
                id: "en".into()
            }
        );
    }

    #[test]
    fn initialize_rejects_duplicate_subtitle_ids() {
        let err = TrackCatalog::initialize(vec![], vec![builtin_sub("en"), builtin_sub("en")])
            .expect_err("duplicate ids");
        assert!(matches!(
            err,
            TrackError::DuplicateId {
                kind: TrackKind::Subtitle,
                ..
            }
        ));
    }

    #[test]
    fn same_id_across_kinds_is_allowed() {
        let catalog =
            TrackCatalog::initialize(vec![audio("en", true)], vec![builtin_sub("en")]).unwrap();
        assert!(catalog.contains(TrackKind::Audio, "en"));
        assert!(catalog.contains(TrackKind::Subtitle, "en"));
    }

    #[test]
    fn add_subtitle_track_rejects_collision_and_keeps_size() {
        let mut catalog = TrackCatalog::initialize(vec![], vec![builtin_sub("en")]).unwrap();
        let err = catalog
            .add_subtitle_track(builtin_sub("en"))
            .expect_err("collision");
        assert!(matches!(err, TrackError::DuplicateId { .. }));
        assert_eq!(catalog.subtitle_tracks().len(), 1);

        catalog.add_subtitle_track(external_sub("custom-1")).unwrap();
        assert_eq!(catalog.subtitle_tracks().len(), 2);
    }

    #[test]
    fn find_by_id_reports_not_found() {
        let catalog = TrackCatalog::initialize(vec![audio("en", true)], vec![]).unwrap();
        let found = catalog.find_by_id(TrackKind::Audio, "en").unwrap();
        assert_eq!(found.id(), "en");
        assert_eq!(found.kind(), TrackKind::Audio);

        let err = catalog
            .find_by_id(TrackKind::Subtitle, "en")
            .expect_err("no subtitles");
        assert_eq!(
            err,
            TrackError::NotFound {
                kind: TrackKind::Subtitle,
                id: "en".into()
            }
        );
    }

    #[test]
    fn default_audio_prefers_flag_then_first() {
        let flagged = TrackCatalog::initialize(
            vec![audio("fr", false), audio("en", true)],
            vec![],
        )
        .unwrap();
        assert_eq!(flagged.default_audio_track().map(AudioTrack::id), Some("en"));

        let unflagged =
            TrackCatalog::initialize(vec![audio("de", false), audio("fr", false)], vec![])
                .unwrap();
        assert_eq!(unflagged.default_audio_track().map(AudioTrack::id), Some("de"));

        let empty = TrackCatalog::default();
        assert!(empty.default_audio_track().is_none());
    }

    #[test]
    fn remove_subtitle_track_only_removes_external() {
        let mut catalog = TrackCatalog::initialize(vec![], vec![builtin_sub("en")]).unwrap();
        catalog.add_subtitle_track(external_sub("custom-1")).unwrap();

        assert!(matches!(
            catalog.remove_subtitle_track("en"),
            Err(TrackError::BuiltinTrack { .. })
        ));
        assert!(matches!(
            catalog.remove_subtitle_track("missing"),
            Err(TrackError::NotFound { .. })
        ));

        let removed = catalog.remove_subtitle_track("custom-1").unwrap();
        assert_eq!(removed.id(), "custom-1");
        assert_eq!(catalog.subtitle_tracks().len(), 1);
    }

    #[test]
    fn release_external_drops_resources() {
        let released = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&released);
        let handle = ResourceHandle::from_bytes("blob:x", vec![0; 4])
            .with_release(move |_| flag.store(true, Ordering::SeqCst));

        let mut catalog = TrackCatalog::initialize(vec![], vec![builtin_sub("en")]).unwrap();
        catalog
            .add_subtitle_track(SubtitleTrack::external("custom-1", "custom", "x", handle))
            .unwrap();

        assert_eq!(catalog.release_external(), 1);
        assert!(released.load(Ordering::SeqCst));
        assert_eq!(catalog.subtitle_tracks().len(), 1);
    }
}
