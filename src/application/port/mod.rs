// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The engine never reaches into ambient platform state; everything it
//! needs from the outside world comes through these traits.
//!
//! # Available Ports
//!
//! - [`clock`]: Epoch time for upload ids
//! - [`media_host`]: The platform media element
//! - [`preferences`]: Persisted key-value preferences

pub mod clock;
pub mod media_host;
pub mod preferences;

pub use clock::Clock;
pub use media_host::{HostCommand, MediaHost};
pub use preferences::{MemoryStore, PreferenceStore};
