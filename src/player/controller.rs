// SPDX-License-Identifier: MPL-2.0
//! Playback transport state and the commands that drive the host.
//!
//! The controller is the single issuer of host commands. User intents go
//! through it so the local flags and the host never disagree:
//!
//! - `play`/`pause` are idempotent and emit at most one command
//! - seeks are clamped to `[0, duration]`
//! - host notifications (`onPlay`, `onTimeUpdate`, ...) correct the local
//!   state without echoing a command back

use crate::application::port::MediaHost;
use crate::config::{MuteRestore, UNMUTE_VOLUME};
use crate::domain::playback::{PlaybackSnapshot, Volume};
use crate::domain::track::{ResourceHandle, SubtitleTrackInfo};
use crate::error::PlaybackError;

/// Transport state bound to one host media element.
pub struct PlaybackController<H> {
    host: H,
    is_playing: bool,
    is_loading: bool,
    current_time_secs: f64,
    duration_secs: f64,
    volume: Volume,
    last_audible: Volume,
    mute_restore: MuteRestore,
    is_fullscreen: bool,
    source: Option<ResourceHandle>,
}

impl<H: MediaHost> PlaybackController<H> {
    /// Creates a paused, loading controller at full volume.
    pub fn new(host: H) -> Self {
        Self {
            host,
            is_playing: false,
            is_loading: true,
            current_time_secs: 0.0,
            duration_secs: 0.0,
            volume: Volume::default(),
            last_audible: Volume::default(),
            mute_restore: MuteRestore::default(),
            is_fullscreen: false,
            source: None,
        }
    }

    /// Sets what [`toggle_mute`](Self::toggle_mute) restores.
    #[must_use]
    pub fn with_mute_restore(mut self, mute_restore: MuteRestore) -> Self {
        self.mute_restore = mute_restore;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn current_time_secs(&self) -> f64 {
        self.current_time_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            is_playing: self.is_playing,
            is_loading: self.is_loading,
            current_time_secs: self.current_time_secs,
            duration_secs: self.duration_secs,
            volume: self.volume,
            is_fullscreen: self.is_fullscreen,
        }
    }

    /// Attaches a new source, releasing the previous one.
    ///
    /// Position and duration reset until the host reports metadata again.
    pub fn load_source(&mut self, source: ResourceHandle) {
        self.host.load_source(source.locator_str());
        tracing::info!(locator = source.locator_str(), "media source attached");
        // Dropping the old handle runs its release hook.
        self.source = Some(source);
        self.is_playing = false;
        self.is_loading = true;
        self.current_time_secs = 0.0;
        self.duration_secs = 0.0;
    }

    /// Host reported media metadata.
    ///
    /// Non-finite or negative durations (live streams, broken headers) are
    /// treated as unknown. Safe to call repeatedly.
    pub fn load_metadata(&mut self, duration_secs: f64) {
        let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            0.0
        };
        self.duration_secs = duration;
        self.current_time_secs = self.current_time_secs.clamp(0.0, duration);
        self.is_loading = false;
        tracing::debug!(duration, "metadata loaded");
    }

    /// Starts playback. Returns false if already playing.
    pub fn play(&mut self) -> bool {
        if self.is_playing {
            return false;
        }
        self.host.play();
        self.is_playing = true;
        true
    }

    /// Pauses playback. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        self.host.pause();
        self.is_playing = false;
        true
    }

    /// Flips play/pause and returns the new playing flag.
    pub fn toggle_play(&mut self) -> bool {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
        self.is_playing
    }

    /// Moves to `target_secs`, clamped to `[0, duration]`.
    ///
    /// NaN targets are ignored. Returns the resulting position.
    pub fn seek(&mut self, target_secs: f64) -> f64 {
        if target_secs.is_nan() {
            tracing::debug!("ignoring NaN seek target");
            return self.current_time_secs;
        }
        let clamped = target_secs.clamp(0.0, self.duration_secs);
        self.host.set_current_time(clamped);
        self.current_time_secs = clamped;
        clamped
    }

    /// Seeks to a fraction of the duration (progress bar click).
    pub fn seek_to_fraction(&mut self, fraction: f64) -> f64 {
        self.seek(fraction * self.duration_secs)
    }

    /// Seeks relative to the current position.
    pub fn skip_by(&mut self, delta_secs: f64) -> f64 {
        self.seek(self.current_time_secs + delta_secs)
    }

    /// Host reported a new position. The host is authoritative.
    pub fn report_time_advance(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        self.current_time_secs = secs.max(0.0);
    }

    /// Host started playing on its own. Returns true if the flag changed.
    pub fn on_host_play(&mut self) -> bool {
        let changed = !self.is_playing;
        self.is_playing = true;
        changed
    }

    /// Host paused on its own (ended, stalled, OS media keys).
    /// Returns true if the flag changed.
    pub fn on_host_pause(&mut self) -> bool {
        let changed = self.is_playing;
        self.is_playing = false;
        changed
    }

    /// Sets the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) -> Volume {
        let volume = Volume::new(volume);
        self.apply_volume(volume);
        volume
    }

    /// Mutes, or unmutes according to the configured [`MuteRestore`].
    pub fn toggle_mute(&mut self) -> Volume {
        let target = if !self.volume.is_muted() {
            Volume::MUTED
        } else {
            match self.mute_restore {
                MuteRestore::Full => Volume::new(UNMUTE_VOLUME),
                MuteRestore::Previous => self.last_audible,
            }
        };
        self.apply_volume(target);
        target
    }

    fn apply_volume(&mut self, volume: Volume) {
        self.host.set_volume(volume.value());
        self.volume = volume;
        if !volume.is_muted() {
            self.last_audible = volume;
        }
    }

    /// Enters or leaves fullscreen and returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::FullscreenDenied`] if the host refuses; the
    /// flag stays unchanged.
    pub fn toggle_fullscreen(&mut self) -> Result<bool, PlaybackError> {
        if self.is_fullscreen {
            self.host.exit_fullscreen();
            self.is_fullscreen = false;
            return Ok(false);
        }
        match self.host.request_fullscreen() {
            Ok(()) => {
                self.is_fullscreen = true;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(error = %err, "fullscreen request denied");
                Err(err)
            }
        }
    }

    /// Host reported a fullscreen change (e.g. the user pressed Escape).
    pub fn on_fullscreen_changed(&mut self, is_fullscreen: bool) {
        self.is_fullscreen = is_fullscreen;
    }

    /// Forwards an audio selection to the host.
    pub fn apply_audio_track(&mut self, id: &str) {
        self.host.select_audio_track(id);
    }

    /// Forwards the visible subtitle track to the host.
    pub fn apply_subtitle_track(&mut self, track: Option<&SubtitleTrackInfo>) {
        self.host.show_subtitle_track(track);
    }
}

impl<H> PlaybackController<H> {
    /// The attached media source, if any.
    pub fn source(&self) -> Option<&ResourceHandle> {
        self.source.as_ref()
    }

    /// Releases the current source. Returns true if one was attached.
    pub fn release_source(&mut self) -> bool {
        self.source.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::HostCommand;
    use crate::infrastructure::host::RecordingHost;
    use crate::test_utils::assert_abs_diff_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn loaded(duration: f64) -> PlaybackController<RecordingHost> {
        let mut controller = PlaybackController::new(RecordingHost::new());
        controller.load_metadata(duration);
        controller
    }

    #[test]
    fn starts_loading_and_paused() {
        let controller = PlaybackController::new(RecordingHost::new());
        let snapshot = controller.snapshot();
        assert!(snapshot.is_loading);
        assert!(!snapshot.is_playing);
        assert_abs_diff_eq!(snapshot.volume.value(), 1.0);
    }

    #[test]
    fn play_and_pause_are_idempotent() {
        let mut controller = loaded(100.0);
        assert!(controller.play());
        assert!(!controller.play());
        assert!(controller.pause());
        assert!(!controller.pause());
        assert_eq!(
            controller.host().commands(),
            &[HostCommand::Play, HostCommand::Pause]
        );
    }

    #[test]
    fn toggle_play_flips_state() {
        let mut controller = loaded(100.0);
        assert!(controller.toggle_play());
        assert!(!controller.toggle_play());
        assert_eq!(controller.host().commands().len(), 2);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut controller = loaded(100.0);
        assert_abs_diff_eq!(controller.seek(150.0), 100.0);
        assert_abs_diff_eq!(controller.seek(-5.0), 0.0);
        assert_eq!(
            controller.host().commands(),
            &[
                HostCommand::SetCurrentTime(100.0),
                HostCommand::SetCurrentTime(0.0)
            ]
        );
    }

    #[test]
    fn seek_before_metadata_stays_at_zero() {
        let mut controller = PlaybackController::new(RecordingHost::new());
        assert_abs_diff_eq!(controller.seek(30.0), 0.0);
    }

    #[test]
    fn nan_seek_is_ignored() {
        let mut controller = loaded(100.0);
        controller.seek(40.0);
        assert_abs_diff_eq!(controller.seek(f64::NAN), 40.0);
        assert_eq!(controller.host().commands().len(), 1);
    }

    #[test]
    fn skip_is_relative_and_clamped() {
        let mut controller = loaded(100.0);
        controller.report_time_advance(95.0);
        assert_abs_diff_eq!(controller.skip_by(10.0), 100.0);
        controller.report_time_advance(5.0);
        assert_abs_diff_eq!(controller.skip_by(-10.0), 0.0);
    }

    #[test]
    fn seek_to_fraction_uses_duration() {
        let mut controller = loaded(200.0);
        assert_abs_diff_eq!(controller.seek_to_fraction(0.25), 50.0);
        assert_abs_diff_eq!(controller.seek_to_fraction(1.5), 200.0);
    }

    #[test]
    fn metadata_clamps_position_and_ends_loading() {
        let mut controller = PlaybackController::new(RecordingHost::new());
        controller.report_time_advance(50.0);
        controller.load_metadata(20.0);
        assert_abs_diff_eq!(controller.current_time_secs(), 20.0);
        assert!(!controller.snapshot().is_loading);

        controller.load_metadata(20.0);
        assert_abs_diff_eq!(controller.duration_secs(), 20.0);
    }

    #[test]
    fn non_finite_duration_is_unknown() {
        let controller = loaded(f64::INFINITY);
        assert_abs_diff_eq!(controller.duration_secs(), 0.0);
        assert_abs_diff_eq!(controller.snapshot().progress_percent(), 0.0);
    }

    #[test]
    fn time_advance_ignores_non_finite_values() {
        let mut controller = loaded(100.0);
        controller.report_time_advance(12.5);
        controller.report_time_advance(f64::NAN);
        assert_abs_diff_eq!(controller.current_time_secs(), 12.5);
        controller.report_time_advance(-1.0);
        assert_abs_diff_eq!(controller.current_time_secs(), 0.0);
    }

    #[test]
    fn host_notifications_do_not_echo_commands() {
        let mut controller = loaded(100.0);
        assert!(controller.on_host_play());
        assert!(!controller.on_host_play());
        assert!(controller.is_playing());
        assert!(controller.on_host_pause());
        assert!(controller.host().commands().is_empty());
    }

    #[test]
    fn volume_is_clamped() {
        let mut controller = loaded(100.0);
        assert_abs_diff_eq!(controller.set_volume(1.7).value(), 1.0);
        assert_abs_diff_eq!(controller.set_volume(-0.2).value(), 0.0);
    }

    #[test]
    fn toggle_mute_restores_full_volume_by_default() {
        let mut controller = loaded(100.0);
        controller.set_volume(0.4);
        assert!(controller.toggle_mute().is_muted());
        assert_abs_diff_eq!(controller.toggle_mute().value(), 1.0);
    }

    #[test]
    fn toggle_mute_can_restore_previous_level() {
        let mut controller = loaded(100.0).with_mute_restore(MuteRestore::Previous);
        controller.set_volume(0.4);
        controller.toggle_mute();
        assert_abs_diff_eq!(controller.toggle_mute().value(), 0.4);
    }

    #[test]
    fn denied_fullscreen_leaves_flag_unchanged() {
        let mut controller =
            PlaybackController::new(RecordingHost::new().deny_fullscreen("not allowed"));
        let err = controller.toggle_fullscreen().expect_err("host refuses");
        assert!(matches!(err, PlaybackError::FullscreenDenied { .. }));
        assert!(!controller.is_fullscreen());
    }

    #[test]
    fn fullscreen_toggles_and_follows_host() {
        let mut controller = loaded(100.0);
        assert_eq!(controller.toggle_fullscreen(), Ok(true));
        controller.on_fullscreen_changed(false);
        assert!(!controller.is_fullscreen());
        assert_eq!(controller.toggle_fullscreen(), Ok(true));
        assert_eq!(controller.toggle_fullscreen(), Ok(false));
        assert_eq!(
            controller.host().commands(),
            &[
                HostCommand::RequestFullscreen,
                HostCommand::RequestFullscreen,
                HostCommand::ExitFullscreen
            ]
        );
    }

    #[test]
    fn loading_a_source_releases_the_previous_one() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);
        let mut controller = loaded(100.0);
        controller.play();
        controller.load_source(
            ResourceHandle::locator("blob:first")
                .with_release(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        );
        assert_eq!(released.load(Ordering::SeqCst), 0);

        controller.load_source(ResourceHandle::locator("blob:second"));
        assert_eq!(released.load(Ordering::SeqCst), 1);

        let snapshot = controller.snapshot();
        assert!(snapshot.is_loading);
        assert!(!snapshot.is_playing);
        assert_eq!(
            controller.source().map(ResourceHandle::locator_str),
            Some("blob:second")
        );
    }
}
