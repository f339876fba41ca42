// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus the tokio plumbing hosts use to drive a
//! session asynchronously.
//!
//! # Available Adapters
//!
//! - [`clock`]: system and manual [`Clock`]s
//! - [`host`]: recording, channel, and logging [`MediaHost`]s
//! - [`scheduler`]: tokio delivery of control hide deadlines
//!
//! [`Clock`]: crate::application::port::Clock
//! [`MediaHost`]: crate::application::port::MediaHost

pub mod clock;
pub mod host;
pub mod scheduler;

pub use clock::{ManualClock, SystemClock};
pub use host::{ChannelHost, LoggingHost, RecordingHost};
pub use scheduler::HideScheduler;
