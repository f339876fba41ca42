// SPDX-License-Identifier: MPL-2.0
//! Admission of user-supplied subtitle files.
//!
//! Validation runs in a fixed order and short-circuits: format first, then
//! size. A rejected upload never touches the catalog, and its resource
//! handle is dropped (released) on the way out.

use super::catalog::TrackCatalog;
use crate::application::port::Clock;
use crate::domain::track::{ResourceHandle, SubtitleTrack, SubtitleTrackInfo, TrackKind};
use crate::error::{Result, ValidationError};

/// Accepted subtitle file extensions (compared case-insensitively).
pub const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "vtt", "txt"];

/// Prefix of every uploaded subtitle id.
pub const UPLOAD_ID_PREFIX: &str = "custom-";

/// Language code given to uploaded tracks; the file carries no language tag.
pub const UPLOAD_LANGUAGE_CODE: &str = "custom";

/// Subtitle file formats the text-track subsystem accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    SubRip,
    WebVtt,
    PlainText,
}

impl SubtitleFormat {
    /// Maps a file extension (with or without the leading dot) to a format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "srt" => Some(Self::SubRip),
            "vtt" => Some(Self::WebVtt),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Maps a mime type to a format.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/x-subrip" | "text/srt" => Some(Self::SubRip),
            "text/vtt" => Some(Self::WebVtt),
            "text/plain" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Detects the format of an upload.
    ///
    /// The final extension of the file name decides when there is one; the
    /// mime/extension hint is only consulted for names without an extension.
    #[must_use]
    pub fn detect(file_name: &str, mime_or_extension: &str) -> Option<Self> {
        if let Some((_, ext)) = split_extension(file_name) {
            return Self::from_extension(ext);
        }
        if mime_or_extension.contains('/') {
            Self::from_mime(mime_or_extension)
        } else {
            Self::from_extension(mime_or_extension)
        }
    }
}

/// A subtitle file delivered by the file picker or a drop.
#[derive(Debug)]
pub struct SubtitleUpload {
    pub file_name: String,
    pub mime_or_extension: String,
    pub size_bytes: u64,
    pub content: ResourceHandle,
}

/// Generates distinct `custom-<epoch millis>` ids.
///
/// When two uploads land in the same millisecond (or the clock steps
/// back), the later ids get a `-<n>` sequence suffix.
#[derive(Debug, Default)]
pub struct UploadIdGenerator {
    last_millis: Option<i64>,
    sequence: u32,
}

impl UploadIdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for an upload admitted at `now_millis`.
    pub fn next_id(&mut self, now_millis: i64) -> String {
        match self.last_millis {
            Some(last) if now_millis <= last => {
                self.sequence += 1;
                format!("{UPLOAD_ID_PREFIX}{last}-{}", self.sequence)
            }
            _ => {
                self.last_millis = Some(now_millis);
                self.sequence = 0;
                format!("{UPLOAD_ID_PREFIX}{now_millis}")
            }
        }
    }
}

/// Validates uploads and admits them into the catalog as external tracks.
#[derive(Debug)]
pub struct SubtitleIngestor<C> {
    clock: C,
    max_bytes: Option<u64>,
    ids: UploadIdGenerator,
}

impl<C: Clock> SubtitleIngestor<C> {
    /// Creates an ingestor; `max_bytes = None` accepts any size.
    pub fn new(clock: C, max_bytes: Option<u64>) -> Self {
        Self {
            clock,
            max_bytes,
            ids: UploadIdGenerator::new(),
        }
    }

    /// Returns the configured size ceiling.
    #[must_use]
    pub fn max_bytes(&self) -> Option<u64> {
        self.max_bytes
    }

    /// Checks an upload without admitting it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedFormat`] or
    /// [`ValidationError::FileTooLarge`], in that order of precedence.
    pub fn validate(
        &self,
        file_name: &str,
        mime_or_extension: &str,
        size_bytes: u64,
    ) -> std::result::Result<SubtitleFormat, ValidationError> {
        let format = SubtitleFormat::detect(file_name, mime_or_extension).ok_or_else(|| {
            ValidationError::UnsupportedFormat {
                file_name: file_name.to_string(),
            }
        })?;
        if let Some(limit) = self.max_bytes {
            if size_bytes > limit {
                return Err(ValidationError::FileTooLarge {
                    size_bytes,
                    limit_bytes: limit,
                });
            }
        }
        Ok(format)
    }

    /// Validates `upload` and adds it to `catalog` as a new external track.
    ///
    /// The new track is not selected; that is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns a validation error (catalog untouched) or, should an id ever
    /// collide, [`TrackError::DuplicateId`](crate::error::TrackError::DuplicateId).
    pub fn ingest(
        &mut self,
        catalog: &mut TrackCatalog,
        upload: SubtitleUpload,
    ) -> Result<SubtitleTrackInfo> {
        let format = match self.validate(
            &upload.file_name,
            &upload.mime_or_extension,
            upload.size_bytes,
        ) {
            Ok(format) => format,
            Err(err) => {
                tracing::warn!(file = %upload.file_name, error = %err, "subtitle upload rejected");
                return Err(err.into());
            }
        };

        let now = self.clock.now_millis();
        let mut id = self.ids.next_id(now);
        while catalog.contains(TrackKind::Subtitle, &id) {
            id = self.ids.next_id(now);
        }

        let label = upload_label(&upload.file_name);
        let track = SubtitleTrack::external(id, UPLOAD_LANGUAGE_CODE, label, upload.content);
        let info = track.info();
        catalog.add_subtitle_track(track)?;

        tracing::info!(
            id = %info.id,
            label = %info.label,
            ?format,
            bytes = upload.size_bytes,
            "subtitle track admitted"
        );
        Ok(info)
    }
}

/// Splits `name` at its final dot, if the part after it is non-empty.
fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once('.').filter(|(_, ext)| !ext.is_empty())
}

/// The file name with its final extension stripped.
fn upload_label(file_name: &str) -> String {
    match split_extension(file_name) {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}
