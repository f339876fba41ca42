// SPDX-License-Identifier: MPL-2.0
//! Player session: one media element, its tracks, and its controls.
//!
//! [`PlayerSession`] wires the catalog, the ingestor, the selection
//! coordinator, the playback controller and the visibility timer together
//! behind two entry points, following the message/update shape:
//!
//! - [`PlayerSession::update`] for user intents ([`Message`])
//! - [`PlayerSession::handle_host_event`] for host callbacks ([`HostEvent`])
//!
//! Every user intent counts as activity for the control auto-hide, and the
//! returned [`Outcome`] tells the host whether to suppress the platform
//! default and which hide deadline to schedule. Hosts that cannot schedule
//! callbacks call [`PlayerSession::tick`] instead.
//!
//! # Example
//!
//! ```
//! use insync_player::infrastructure::{RecordingHost, SystemClock};
//! use insync_player::session::{HostEvent, Message, PlayerSession, SessionOptions};
//! use insync_player::session::language::LanguageState;
//! use insync_player::tracks::TrackCatalog;
//! use insync_player::domain::track::TrackManifest;
//! use std::time::Instant;
//!
//! let catalog = TrackCatalog::from_manifest(TrackManifest::stock()).unwrap();
//! let mut session = PlayerSession::new(
//!     RecordingHost::new(),
//!     SystemClock,
//!     catalog,
//!     LanguageState::default(),
//!     SessionOptions::default(),
//! );
//! session.handle_host_event(HostEvent::MetadataLoaded { duration_secs: 120.0 });
//! session.update(Message::TogglePlayback, Instant::now()).unwrap();
//! assert!(session.snapshot().playback.is_playing);
//! ```

pub mod language;
pub mod message;

pub use message::{HostEvent, Message, Outcome};

use crate::application::port::{Clock, MediaHost, PreferenceStore};
use crate::config::{Config, MuteRestore, DEFAULT_MAX_VIDEO_BYTES};
use crate::domain::playback::{HideDelay, PlaybackSnapshot, SeekStep};
use crate::domain::track::{AudioTrack, SubtitleTrackInfo};
use crate::error::Result;
use crate::player::{
    ControlVisibilityTimer, KeyAction, KeyDisposition, PlaybackController, VisibilitySnapshot,
};
use crate::tracks::{
    SelectionSnapshot, SubtitleIngestor, SubtitleUpload, TrackCatalog, TrackSelectionCoordinator,
    VideoFormat, VideoUpload,
};
use language::{LanguageState, TextDirection};
use std::time::Instant;

/// Tunables for a session, usually taken from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub seek_step: SeekStep,
    pub hide_delay: HideDelay,
    pub max_subtitle_bytes: Option<u64>,
    pub max_video_bytes: Option<u64>,
    pub mute_restore: MuteRestore,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            seek_step: config
                .seek_step_secs
                .map(SeekStep::new)
                .unwrap_or_default(),
            hide_delay: config
                .controls_hide_delay_ms
                .map(HideDelay::from_millis)
                .unwrap_or_default(),
            max_subtitle_bytes: config.max_subtitle_bytes,
            max_video_bytes: config.max_video_bytes.or(Some(DEFAULT_MAX_VIDEO_BYTES)),
            mute_restore: config.mute_restore.unwrap_or_default(),
        }
    }
}

/// Everything the presentation layer needs to render the player.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub playback: PlaybackSnapshot,
    pub selection: SelectionSnapshot,
    pub visibility: VisibilitySnapshot,
    pub audio_tracks: Vec<AudioTrack>,
    pub subtitle_tracks: Vec<SubtitleTrackInfo>,
    pub language: &'static str,
    pub text_direction: TextDirection,
}

/// One player instance.
pub struct PlayerSession<H, C> {
    catalog: TrackCatalog,
    ingestor: SubtitleIngestor<C>,
    selection: TrackSelectionCoordinator,
    controller: PlaybackController<H>,
    visibility: ControlVisibilityTimer,
    language: LanguageState,
    seek_step: SeekStep,
    max_video_bytes: Option<u64>,
}

impl<H: MediaHost, C: Clock> PlayerSession<H, C> {
    /// Creates a session over an initialized catalog.
    ///
    /// Audio starts on the catalog's default track with subtitles off.
    pub fn new(
        host: H,
        clock: C,
        catalog: TrackCatalog,
        language: LanguageState,
        options: SessionOptions,
    ) -> Self {
        let selection = TrackSelectionCoordinator::new(&catalog);
        Self {
            ingestor: SubtitleIngestor::new(clock, options.max_subtitle_bytes),
            selection,
            catalog,
            controller: PlaybackController::new(host).with_mute_restore(options.mute_restore),
            visibility: ControlVisibilityTimer::new(options.hide_delay),
            language,
            seek_step: options.seek_step,
            max_video_bytes: options.max_video_bytes,
        }
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    pub fn controller(&self) -> &PlaybackController<H> {
        &self.controller
    }

    pub fn host(&self) -> &H {
        self.controller.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.controller.host_mut()
    }

    #[must_use]
    pub fn language(&self) -> LanguageState {
        self.language
    }

    #[must_use]
    pub fn seek_step(&self) -> SeekStep {
        self.seek_step
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            playback: self.controller.snapshot(),
            selection: self.selection.snapshot(),
            visibility: self.visibility.snapshot(),
            audio_tracks: self.catalog.audio_tracks().to_vec(),
            subtitle_tracks: self.catalog.subtitle_infos(),
            language: self.language.code(),
            text_direction: self.language.direction(),
        }
    }

    /// Applies a user intent.
    ///
    /// # Errors
    ///
    /// Returns the failure of the intent (unknown track id, denied
    /// fullscreen, removal of a built-in track). State is unchanged by the
    /// failed intent itself, but the activity still registers: a pending
    /// hide deadline is then visible through [`snapshot`](Self::snapshot).
    pub fn update(&mut self, message: Message, now: Instant) -> Result<Outcome> {
        let mut outcome = Outcome::default();
        let is_activity = match &message {
            Message::PointerLeave => false,
            Message::KeyDown(press) => {
                let disposition = KeyDisposition::route(press);
                outcome.prevent_default = disposition.prevents_default();
                disposition != KeyDisposition::Unbound
            }
            _ => true,
        };

        let result = self.apply(message);
        self.sync_playback_state();
        if is_activity {
            outcome.scheduled_hide = self.visibility.notify_activity(now);
        }
        result.map(|()| outcome)
    }

    fn apply(&mut self, message: Message) -> Result<()> {
        match message {
            Message::TogglePlayback => {
                self.controller.toggle_play();
            }
            Message::Play => {
                self.controller.play();
            }
            Message::Pause => {
                self.controller.pause();
            }
            Message::Seek(secs) => {
                self.controller.seek(secs);
            }
            Message::SeekToFraction(fraction) => {
                self.controller.seek_to_fraction(fraction.clamp(0.0, 1.0));
            }
            Message::SkipForward => {
                self.controller.skip_by(self.seek_step.value());
            }
            Message::SkipBackward => {
                self.controller.skip_by(-self.seek_step.value());
            }
            Message::SetVolume(volume) => {
                self.controller.set_volume(volume);
            }
            Message::ToggleMute => {
                self.controller.toggle_mute();
            }
            Message::ToggleFullscreen => {
                self.controller.toggle_fullscreen()?;
            }
            Message::SelectAudioTrack(id) => {
                self.selection.select_audio_track(&self.catalog, &id)?;
                self.controller.apply_audio_track(&id);
            }
            Message::SelectSubtitleTrack(id) => {
                self.selection
                    .select_subtitle_track(&self.catalog, id.as_deref())?;
                self.show_selected_subtitle();
            }
            Message::ToggleSubtitles => {
                self.selection.toggle_subtitles_enabled(&self.catalog);
                self.show_selected_subtitle();
            }
            Message::RemoveSubtitleTrack(id) => self.remove_subtitle_track(&id)?,
            Message::KeyDown(press) => {
                if let KeyDisposition::Trigger(action) = KeyDisposition::route(&press) {
                    return self.apply(key_message(action));
                }
            }
            Message::PointerActivity => {}
            Message::PointerLeave => self.visibility.notify_pointer_leave(),
        }
        Ok(())
    }

    /// Applies a host callback.
    pub fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::MetadataLoaded { duration_secs } => {
                self.controller.load_metadata(duration_secs);
            }
            HostEvent::TimeUpdate { current_time_secs } => {
                self.controller.report_time_advance(current_time_secs);
            }
            HostEvent::Played => {
                self.controller.on_host_play();
            }
            HostEvent::Paused => {
                self.controller.on_host_pause();
            }
            HostEvent::FullscreenChanged(is_fullscreen) => {
                self.controller.on_fullscreen_changed(is_fullscreen);
            }
            HostEvent::HideDeadline(token) => {
                self.visibility.on_deadline(token);
            }
        }
        self.sync_playback_state();
    }

    /// Expires a due hide deadline. Returns true if the controls were hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.visibility.tick(now)
    }

    /// Validates and admits an uploaded subtitle file, optionally selecting it.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the catalog is untouched in that case.
    pub fn admit_subtitle(
        &mut self,
        upload: SubtitleUpload,
        select: bool,
    ) -> Result<SubtitleTrackInfo> {
        let info = self.ingestor.ingest(&mut self.catalog, upload)?;
        if select {
            self.selection
                .select_subtitle_track(&self.catalog, Some(&info.id))?;
            self.show_selected_subtitle();
        }
        Ok(info)
    }

    /// Removes an uploaded subtitle track and releases its content.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::NotFound`] or [`TrackError::BuiltinTrack`].
    ///
    /// [`TrackError::NotFound`]: crate::error::TrackError::NotFound
    /// [`TrackError::BuiltinTrack`]: crate::error::TrackError::BuiltinTrack
    pub fn remove_subtitle_track(&mut self, id: &str) -> Result<()> {
        let removed = self.catalog.remove_subtitle_track(id)?;
        if self.selection.forget_subtitle_track(&removed) {
            self.controller.apply_subtitle_track(None);
        }
        tracing::info!(id, "subtitle track removed");
        Ok(())
    }

    /// Validates a user-picked video and attaches it as the new source.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the current source stays attached.
    pub fn load_video(&mut self, upload: VideoUpload) -> Result<VideoFormat> {
        let format = match upload.validate(self.max_video_bytes) {
            Ok(format) => format,
            Err(err) => {
                tracing::warn!(file = %upload.file_name, error = %err, "video rejected");
                return Err(err.into());
            }
        };
        tracing::info!(file = %upload.file_name, ?format, "video accepted");
        self.controller.load_source(upload.content);
        self.sync_playback_state();
        Ok(format)
    }

    /// Switches the UI language and persists it.
    ///
    /// # Errors
    ///
    /// See [`LanguageState::set`].
    pub fn set_language(&mut self, store: &mut impl PreferenceStore, tag: &str) -> Result<()> {
        self.language.set(store, tag)
    }

    fn sync_playback_state(&mut self) {
        self.visibility
            .notify_playback_state_change(self.controller.is_playing());
    }

    fn show_selected_subtitle(&mut self) {
        let visible = self
            .selection
            .snapshot()
            .visible_subtitle_track_id()
            .and_then(|id| self.catalog.find_subtitle(id).ok())
            .map(|track| track.info());
        self.controller.apply_subtitle_track(visible.as_ref());
    }
}

impl<H, C> PlayerSession<H, C> {
    /// Cancels the pending hide and releases uploaded tracks and the source.
    ///
    /// Runs on drop as well; calling it early is harmless.
    pub fn teardown(&mut self) {
        self.visibility.teardown();
        let released_tracks = self.catalog.release_external();
        let released_source = self.controller.release_source();
        if released_tracks > 0 || released_source {
            tracing::debug!(released_tracks, released_source, "session torn down");
        }
    }
}

impl<H, C> Drop for PlayerSession<H, C> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn key_message(action: KeyAction) -> Message {
    match action {
        KeyAction::TogglePlayback => Message::TogglePlayback,
        KeyAction::ToggleFullscreen => Message::ToggleFullscreen,
        KeyAction::SkipBackward => Message::SkipBackward,
        KeyAction::SkipForward => Message::SkipForward,
    }
}
