// SPDX-License-Identifier: MPL-2.0
//! Host media element port definition.
//!
//! This module defines the [`MediaHost`] trait, the narrow capability the
//! playback controller needs from the platform's media element. The
//! controller holds its host exclusively; nothing else issues commands.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget: the host reports the resulting state
//!   back asynchronously (`onPlay`, `onTimeUpdate`, ...)
//! - Only fullscreen can be refused synchronously
//! - Track rendering hooks have no-op defaults so hosts without alternate
//!   tracks stay small

use crate::domain::track::SubtitleTrackInfo;
use crate::error::PlaybackError;

/// Port for the platform media element.
///
/// # Example
///
/// ```
/// use insync_player::application::port::MediaHost;
///
/// fn restart(host: &mut impl MediaHost) {
///     host.set_current_time(0.0);
///     host.play();
/// }
/// ```
pub trait MediaHost {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Moves the playback position.
    fn set_current_time(&mut self, secs: f64);

    /// Sets the output volume (already clamped to 0.0–1.0).
    fn set_volume(&mut self, volume: f32);

    /// Enters fullscreen.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::FullscreenDenied`] if the platform refuses.
    fn request_fullscreen(&mut self) -> Result<(), PlaybackError>;

    /// Leaves fullscreen.
    fn exit_fullscreen(&mut self);

    /// Attaches a new media source.
    fn load_source(&mut self, _locator: &str) {}

    /// Switches the rendered audio track.
    fn select_audio_track(&mut self, _id: &str) {}

    /// Shows the given subtitle track, or hides subtitles when `None`.
    fn show_subtitle_track(&mut self, _track: Option<&SubtitleTrackInfo>) {}
}

/// A host command, as recorded or forwarded by host adapters.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f32),
    RequestFullscreen,
    ExitFullscreen,
    LoadSource(String),
    SelectAudioTrack(String),
    ShowSubtitleTrack(Option<String>),
}

impl<H: MediaHost + ?Sized> MediaHost for Box<H> {
    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn set_current_time(&mut self, secs: f64) {
        (**self).set_current_time(secs);
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn request_fullscreen(&mut self) -> Result<(), PlaybackError> {
        (**self).request_fullscreen()
    }

    fn exit_fullscreen(&mut self) {
        (**self).exit_fullscreen();
    }

    fn load_source(&mut self, locator: &str) {
        (**self).load_source(locator);
    }

    fn select_audio_track(&mut self, id: &str) {
        (**self).select_audio_track(id);
    }

    fn show_subtitle_track(&mut self, track: Option<&SubtitleTrackInfo>) {
        (**self).show_subtitle_track(track);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaHost) {}

    struct Minimal {
        playing: bool,
    }

    impl MediaHost for Minimal {
        fn play(&mut self) {
            self.playing = true;
        }
        fn pause(&mut self) {
            self.playing = false;
        }
        fn set_current_time(&mut self, _secs: f64) {}
        fn set_volume(&mut self, _volume: f32) {}
        fn request_fullscreen(&mut self) -> Result<(), PlaybackError> {
            Err(PlaybackError::FullscreenDenied {
                reason: "unsupported".into(),
            })
        }
        fn exit_fullscreen(&mut self) {}
    }

    #[test]
    fn track_hooks_default_to_no_op() {
        let mut host = Minimal { playing: false };
        host.select_audio_track("fr");
        host.show_subtitle_track(None);
        host.load_source("/videos/default.mp4");
        assert!(!host.playing);
    }

    #[test]
    fn boxed_host_forwards_commands() {
        let mut host: Box<dyn MediaHost> = Box::new(Minimal { playing: false });
        host.play();
        assert!(host.request_fullscreen().is_err());
    }
}
