// SPDX-License-Identifier: MPL-2.0
//! `insync_player` is the playback and track coordination core of a
//! multilingual video player.
//!
//! It keeps transport state consistent with a host media element, manages
//! audio and subtitle tracks (including user-uploaded subtitle files),
//! auto-hides the on-screen controls during playback, and resolves the UI
//! language. Decoding and rendering stay with the host.

#![doc(html_root_url = "https://docs.rs/insync_player/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod player;
pub mod session;
pub mod tracks;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use session::{HostEvent, Message, Outcome, PlayerSession, SessionOptions, SessionSnapshot};
