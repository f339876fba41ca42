// SPDX-License-Identifier: MPL-2.0
//! [`MediaHost`] adapters.
//!
//! - [`RecordingHost`]: keeps every command in memory (tests, replays)
//! - [`ChannelHost`]: forwards commands over a tokio channel to whatever
//!   drives the real media element
//! - [`LoggingHost`]: logs commands, for the headless binary

use crate::application::port::{HostCommand, MediaHost};
use crate::domain::track::SubtitleTrackInfo;
use crate::error::PlaybackError;
use tokio::sync::mpsc;

/// Records commands in issue order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    commands: Vec<HostCommand>,
    fullscreen_denial: Option<String>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every fullscreen request fail with `reason`.
    #[must_use]
    pub fn deny_fullscreen(mut self, reason: impl Into<String>) -> Self {
        self.fullscreen_denial = Some(reason.into());
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Returns and clears the recorded commands.
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl MediaHost for RecordingHost {
    fn play(&mut self) {
        self.commands.push(HostCommand::Play);
    }

    fn pause(&mut self) {
        self.commands.push(HostCommand::Pause);
    }

    fn set_current_time(&mut self, secs: f64) {
        self.commands.push(HostCommand::SetCurrentTime(secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.commands.push(HostCommand::SetVolume(volume));
    }

    fn request_fullscreen(&mut self) -> Result<(), PlaybackError> {
        if let Some(reason) = &self.fullscreen_denial {
            return Err(PlaybackError::FullscreenDenied {
                reason: reason.clone(),
            });
        }
        self.commands.push(HostCommand::RequestFullscreen);
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.commands.push(HostCommand::ExitFullscreen);
    }

    fn load_source(&mut self, locator: &str) {
        self.commands.push(HostCommand::LoadSource(locator.to_string()));
    }

    fn select_audio_track(&mut self, id: &str) {
        self.commands
            .push(HostCommand::SelectAudioTrack(id.to_string()));
    }

    fn show_subtitle_track(&mut self, track: Option<&SubtitleTrackInfo>) {
        self.commands.push(HostCommand::ShowSubtitleTrack(
            track.map(|info| info.id.clone()),
        ));
    }
}

/// Forwards commands to a receiver task.
///
/// Fullscreen cannot be answered synchronously over a channel: the request
/// is forwarded and only a closed channel counts as a denial. The receiver
/// reports the real outcome back as a fullscreen-changed event.
#[derive(Clone)]
pub struct ChannelHost {
    tx: mpsc::UnboundedSender<HostCommand>,
}

impl ChannelHost {
    /// Creates a host and the receiving end of its command stream.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<HostCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, command: HostCommand) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(command = ?err.0, "media host not running, command dropped");
                false
            }
        }
    }
}

impl std::fmt::Debug for ChannelHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelHost")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl MediaHost for ChannelHost {
    fn play(&mut self) {
        self.send(HostCommand::Play);
    }

    fn pause(&mut self) {
        self.send(HostCommand::Pause);
    }

    fn set_current_time(&mut self, secs: f64) {
        self.send(HostCommand::SetCurrentTime(secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(HostCommand::SetVolume(volume));
    }

    fn request_fullscreen(&mut self) -> Result<(), PlaybackError> {
        if self.send(HostCommand::RequestFullscreen) {
            Ok(())
        } else {
            Err(PlaybackError::FullscreenDenied {
                reason: "media host not running".to_string(),
            })
        }
    }

    fn exit_fullscreen(&mut self) {
        self.send(HostCommand::ExitFullscreen);
    }

    fn load_source(&mut self, locator: &str) {
        self.send(HostCommand::LoadSource(locator.to_string()));
    }

    fn select_audio_track(&mut self, id: &str) {
        self.send(HostCommand::SelectAudioTrack(id.to_string()));
    }

    fn show_subtitle_track(&mut self, track: Option<&SubtitleTrackInfo>) {
        self.send(HostCommand::ShowSubtitleTrack(
            track.map(|info| info.id.clone()),
        ));
    }
}

/// Logs every command at info level. Fullscreen is always granted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHost;

impl MediaHost for LoggingHost {
    fn play(&mut self) {
        tracing::info!("host: play");
    }

    fn pause(&mut self) {
        tracing::info!("host: pause");
    }

    fn set_current_time(&mut self, secs: f64) {
        tracing::info!(secs, "host: seek");
    }

    fn set_volume(&mut self, volume: f32) {
        tracing::info!(volume, "host: volume");
    }

    fn request_fullscreen(&mut self) -> Result<(), PlaybackError> {
        tracing::info!("host: enter fullscreen");
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        tracing::info!("host: exit fullscreen");
    }

    fn load_source(&mut self, locator: &str) {
        tracing::info!(locator, "host: load source");
    }

    fn select_audio_track(&mut self, id: &str) {
        tracing::info!(id, "host: audio track");
    }

    fn show_subtitle_track(&mut self, track: Option<&SubtitleTrackInfo>) {
        match track {
            Some(info) => tracing::info!(id = %info.id, label = %info.label, "host: show subtitles"),
            None => tracing::info!("host: hide subtitles"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_host_keeps_order() {
        let mut host = RecordingHost::new();
        host.play();
        host.set_current_time(4.0);
        host.show_subtitle_track(None);
        assert_eq!(
            host.take_commands(),
            vec![
                HostCommand::Play,
                HostCommand::SetCurrentTime(4.0),
                HostCommand::ShowSubtitleTrack(None)
            ]
        );
        assert!(host.commands().is_empty());
    }

    #[test]
    fn denied_fullscreen_is_not_recorded() {
        let mut host = RecordingHost::new().deny_fullscreen("policy");
        assert!(host.request_fullscreen().is_err());
        assert!(host.commands().is_empty());
    }

    #[tokio::test]
    async fn channel_host_forwards_commands() {
        let (mut host, mut rx) = ChannelHost::channel();
        host.set_volume(0.5);
        host.select_audio_track("fr");
        assert_eq!(rx.recv().await, Some(HostCommand::SetVolume(0.5)));
        assert_eq!(
            rx.recv().await,
            Some(HostCommand::SelectAudioTrack("fr".into()))
        );
    }

    #[test]
    fn logging_host_grants_fullscreen() {
        let mut host = LoggingHost;
        host.load_source("movie.mp4");
        assert!(host.request_fullscreen().is_ok());
    }

    #[test]
    fn closed_channel_denies_fullscreen() {
        let (mut host, rx) = ChannelHost::channel();
        drop(rx);
        host.play();
        assert!(matches!(
            host.request_fullscreen(),
            Err(PlaybackError::FullscreenDenied { .. })
        ));
    }
}
