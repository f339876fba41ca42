// SPDX-License-Identifier: MPL-2.0
//! Playback control: transport state, key bindings, and control auto-hide.

pub mod controller;
pub mod keyboard;
pub mod timer;
pub mod visibility;

pub use controller::PlaybackController;
pub use keyboard::{KeyAction, KeyDisposition, KeyPress};
pub use timer::{SingleSlotTimer, TimerToken};
pub use visibility::{ControlVisibilityTimer, ScheduledHide, VisibilitySnapshot};
