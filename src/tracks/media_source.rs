// SPDX-License-Identifier: MPL-2.0
//! Validation of user-picked video sources.

use crate::domain::track::ResourceHandle;
use crate::error::ValidationError;

/// Video container formats accepted for playback.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "avi", "mkv"];

/// Video containers the host media element is expected to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Mp4,
    WebM,
    Ogg,
    Avi,
    Mkv,
}

impl VideoFormat {
    /// Maps a bare subtype or extension (`"mp4"`, `".WebM"`) to a format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "mp4" => Some(Self::Mp4),
            "webm" => Some(Self::WebM),
            "ogg" | "ogv" => Some(Self::Ogg),
            "avi" | "x-msvideo" => Some(Self::Avi),
            "mkv" | "x-matroska" => Some(Self::Mkv),
            _ => None,
        }
    }

    /// Detects the format from a `video/*` mime type, else from the file extension.
    #[must_use]
    pub fn detect(file_name: &str, mime_or_extension: &str) -> Option<Self> {
        if let Some((kind, subtype)) = mime_or_extension.split_once('/') {
            if !kind.eq_ignore_ascii_case("video") {
                return None;
            }
            let subtype = subtype.split(';').next().unwrap_or_default().trim();
            return Self::from_extension(subtype);
        }
        if !mime_or_extension.is_empty() {
            return Self::from_extension(mime_or_extension);
        }
        file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
    }
}

/// A video file delivered by the uploader.
#[derive(Debug)]
pub struct VideoUpload {
    pub file_name: String,
    pub mime_or_extension: String,
    pub size_bytes: u64,
    pub content: ResourceHandle,
}

impl VideoUpload {
    /// Checks format, then size against `max_bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedFormat`] or
    /// [`ValidationError::FileTooLarge`].
    pub fn validate(&self, max_bytes: Option<u64>) -> Result<VideoFormat, ValidationError> {
        let format = VideoFormat::detect(&self.file_name, &self.mime_or_extension).ok_or_else(
            || ValidationError::UnsupportedFormat {
                file_name: self.file_name.clone(),
            },
        )?;
        match max_bytes {
            Some(limit) if self.size_bytes > limit => Err(ValidationError::FileTooLarge {
                size_bytes: self.size_bytes,
                limit_bytes: limit,
            }),
            _ => Ok(format),
        }
    }
}
