// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the session update loop.
//!
//! Measures the performance of:
//! - Routing a burst of user intents (keys, pointer activity, seeks)
//! - Admitting uploaded subtitle tracks into a growing catalog
//! - Building render snapshots

use criterion::{criterion_group, criterion_main, Criterion};
use insync_player::domain::track::{ResourceHandle, TrackManifest};
use insync_player::infrastructure::{ManualClock, RecordingHost};
use insync_player::player::KeyPress;
use insync_player::session::language::LanguageState;
use insync_player::tracks::{SubtitleUpload, TrackCatalog};
use insync_player::{HostEvent, Message, PlayerSession, SessionOptions};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn new_session(clock: &ManualClock) -> PlayerSession<RecordingHost, &ManualClock> {
    let catalog = TrackCatalog::from_manifest(TrackManifest::stock()).unwrap();
    let mut session = PlayerSession::new(
        RecordingHost::new(),
        clock,
        catalog,
        LanguageState::default(),
        SessionOptions::default(),
    );
    session.handle_host_event(HostEvent::MetadataLoaded {
        duration_secs: 7200.0,
    });
    session
}

/// Benchmark a burst of mixed user intents.
fn bench_update_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let clock = ManualClock::new(0);

    group.bench_function("update_burst", |b| {
        let mut session = new_session(&clock);
        let start = Instant::now();
        b.iter(|| {
            for step in 0..100u64 {
                let now = start + Duration::from_millis(step * 16);
                let message = match step % 4 {
                    0 => Message::KeyDown(KeyPress::new("Space")),
                    1 => Message::PointerActivity,
                    2 => Message::KeyDown(KeyPress::new("ArrowRight")),
                    _ => Message::Seek(step as f64),
                };
                black_box(session.update(message, now).unwrap());
            }
            session.host_mut().take_commands();
        });
    });

    group.finish();
}

/// Benchmark subtitle admission into a catalog that keeps growing.
fn bench_admit_subtitles(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("admit_subtitle", |b| {
        let clock = ManualClock::new(1_700_000_000_000);
        let mut session = new_session(&clock);
        b.iter(|| {
            let content = vec![b'x'; 4096];
            let upload = SubtitleUpload {
                file_name: "movie.srt".to_string(),
                mime_or_extension: String::new(),
                size_bytes: content.len() as u64,
                content: ResourceHandle::from_bytes("blob:movie.srt", content),
            };
            black_box(session.admit_subtitle(upload, false).unwrap());
        });
    });

    group.finish();
}

/// Benchmark snapshot construction.
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let clock = ManualClock::new(0);
    let session = new_session(&clock);

    group.bench_function("snapshot", |b| {
        b.iter(|| black_box(session.snapshot()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_update_burst,
    bench_admit_subtitles,
    bench_snapshot
);
criterion_main!(benches);
