// SPDX-License-Identifier: MPL-2.0
//! Error types shared by the playback and track coordination engine.
//!
//! Domain errors are small, cloneable enums so the presentation layer can
//! match on them and pick a localized message through [`i18n_key`].
//!
//! [`i18n_key`]: ValidationError::i18n_key

use crate::domain::track::TrackKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Validation(ValidationError),
    Track(TrackError),
    Playback(PlaybackError),
}

/// Rejection reasons for user-supplied files (subtitles or video sources).
///
/// Validation never mutates state: a rejected upload leaves the catalog
/// and the controller exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The final extension (or mime subtype) is not an accepted format.
    #[error("unsupported file format: {file_name}")]
    UnsupportedFormat { file_name: String },

    /// The file is larger than the configured ceiling.
    #[error("file too large: {size_bytes} bytes (limit {limit_bytes})")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },

    /// The requested UI language has no shipped labels.
    #[error("unsupported language: {code}")]
    UnsupportedLanguage { code: String },
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::UnsupportedFormat { .. } => "error-upload-unsupported-format",
            ValidationError::FileTooLarge { .. } => "error-upload-file-too-large",
            ValidationError::UnsupportedLanguage { .. } => "error-language-unsupported",
        }
    }
}

/// Catalog integrity and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    /// A selection or lookup referenced an id the catalog does not hold.
    #[error("{kind} track not found: {id}")]
    NotFound { kind: TrackKind, id: String },

    /// An insertion collided with an existing id of the same kind.
    #[error("duplicate {kind} track id: {id}")]
    DuplicateId { kind: TrackKind, id: String },

    /// Built-in tracks live for the whole session and cannot be removed.
    #[error("built-in {kind} track cannot be removed: {id}")]
    BuiltinTrack { kind: TrackKind, id: String },
}

impl TrackError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TrackError::NotFound { .. } => "error-track-not-found",
            TrackError::DuplicateId { .. } => "error-track-duplicate-id",
            TrackError::BuiltinTrack { .. } => "error-track-builtin",
        }
    }
}

/// Failures reported by the host media element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The host refused to enter fullscreen.
    #[error("fullscreen request denied: {reason}")]
    FullscreenDenied { reason: String },
}

impl PlaybackError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::FullscreenDenied { .. } => "error-fullscreen-denied",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Validation(e) => write!(f, "Validation Error: {}", e),
            Error::Track(e) => write!(f, "Track Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<TrackError> for Error {
    fn from(err: TrackError) -> Self {
        Error::Track(err)
    }
}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
