// SPDX-License-Identifier: MPL-2.0
//! Headless driver: builds a session with the stock tracks, admits the
//! given files, and prints the resulting state.
//!
//! ```text
//! insync_player [--lang CODE] [--duration SECS] [--subtitle FILE]... [VIDEO]
//! ```

use insync_player::config::{self, SettingsStore};
use insync_player::domain::track::{ResourceHandle, TrackManifest};
use insync_player::infrastructure::{LoggingHost, SystemClock};
use insync_player::session::language::LanguageState;
use insync_player::tracks::{SubtitleUpload, TrackCatalog, VideoUpload};
use insync_player::{HostEvent, PlayerSession, SessionOptions, SessionSnapshot};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

struct Args {
    lang: Option<String>,
    duration: Option<f64>,
    subtitles: Vec<PathBuf>,
    video: Option<PathBuf>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let lang = args.opt_value_from_str("--lang")?;
    let duration = args.opt_value_from_str("--duration")?;
    let subtitles = args.values_from_str("--subtitle")?;
    let video = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);
    Ok(Args {
        lang,
        duration,
        subtitles,
        video,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("insync_player=info")),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(snapshot) => {
            print_snapshot(&snapshot);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> insync_player::Result<SessionSnapshot> {
    let store = SettingsStore::open_default().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "settings unavailable, using defaults");
        SettingsStore::detached(config::Config::default())
    });
    let language = LanguageState::resolve(args.lang.as_deref(), &store);
    let options = SessionOptions::from(store.config());

    let catalog = TrackCatalog::from_manifest(TrackManifest::stock())?;
    let mut session = PlayerSession::new(LoggingHost, SystemClock, catalog, language, options);

    if let Some(path) = &args.video {
        let upload = VideoUpload {
            file_name: file_name(path),
            mime_or_extension: String::new(),
            size_bytes: std::fs::metadata(path)?.len(),
            content: ResourceHandle::locator(path.display().to_string()),
        };
        session.load_video(upload)?;
    }
    if let Some(duration_secs) = args.duration {
        session.handle_host_event(HostEvent::MetadataLoaded { duration_secs });
    }

    for (index, path) in args.subtitles.iter().enumerate() {
        let bytes = std::fs::read(path)?;
        let upload = SubtitleUpload {
            file_name: file_name(path),
            mime_or_extension: String::new(),
            size_bytes: bytes.len() as u64,
            content: ResourceHandle::from_bytes(path.display().to_string(), bytes),
        };
        // The first admitted file becomes the visible track.
        session.admit_subtitle(upload, index == 0)?;
    }

    Ok(session.snapshot())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    let playback = &snapshot.playback;
    println!(
        "language: {} ({:?})",
        snapshot.language, snapshot.text_direction
    );
    println!(
        "position: {} / {} ({:.0}%)",
        playback.current_time_label(),
        playback.duration_label(),
        playback.progress_percent()
    );
    println!("phase: {:?}", playback.phase());
    println!("volume: {:.2}", playback.volume.value());
    for track in &snapshot.audio_tracks {
        let marker = if snapshot.selection.selected_audio_track_id.as_deref() == Some(track.id()) {
            '*'
        } else {
            ' '
        };
        println!("audio {marker} {} [{}] {}", track.id(), track.language_code(), track.label());
    }
    let visible = snapshot.selection.visible_subtitle_track_id();
    for track in &snapshot.subtitle_tracks {
        let marker = if visible == Some(track.id.as_str()) { '*' } else { ' ' };
        let origin = if track.is_external { "uploaded" } else { "built-in" };
        println!(
            "subtitle {marker} {} [{}] {} ({origin})",
            track.id, track.language_code, track.label
        );
    }
}
