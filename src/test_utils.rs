// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Float assertions come from `approx`; positions and volumes are floats
//! and `assert_eq!` is too strict for computed values.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::track::{ResourceHandle, TrackManifest};
use crate::tracks::{SubtitleUpload, TrackCatalog};

/// Catalog built from the stock manifest (en, fr, de, ar).
pub fn stock_catalog() -> TrackCatalog {
    TrackCatalog::from_manifest(TrackManifest::stock()).expect("stock manifest is valid")
}

/// A subtitle upload whose type is detected from `file_name` alone.
pub fn subtitle_upload(file_name: &str, content: &[u8]) -> SubtitleUpload {
    SubtitleUpload {
        file_name: file_name.to_string(),
        mime_or_extension: String::new(),
        size_bytes: content.len() as u64,
        content: ResourceHandle::from_bytes(format!("blob:{file_name}"), content.to_vec()),
    }
}
