// SPDX-License-Identifier: MPL-2.0
//! Track coordination: what exists, what gets admitted, what is selected.
//!
//! - [`catalog`]: the set of audio and subtitle tracks
//! - [`ingest`]: validation and admission of uploaded subtitle files
//! - [`media_source`]: validation of user-picked video files
//! - [`selection`]: current audio and subtitle selection

pub mod catalog;
pub mod ingest;
pub mod media_source;
pub mod selection;

pub use catalog::{TrackCatalog, TrackRef};
pub use ingest::{SubtitleFormat, SubtitleIngestor, SubtitleUpload, UploadIdGenerator};
pub use media_source::{VideoFormat, VideoUpload};
pub use selection::{SelectionSnapshot, TrackSelectionCoordinator};
