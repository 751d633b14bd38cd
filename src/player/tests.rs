use std::path::{Path, PathBuf};
use std::time::Duration;

use super::progress::{format_time, percent};
use super::*;
use crate::library::Track;
use crate::media::{MediaElement, MediaError};

/// Recording stand-in for the real media element.
#[derive(Default)]
struct FakeMedia {
    sources: Vec<PathBuf>,
    loads: u32,
    play_calls: u32,
    pause_calls: u32,
    position: Duration,
    seeks: Vec<Duration>,
    total: Option<Duration>,
    fail_next_load: bool,
}

impl MediaElement for FakeMedia {
    fn set_source(&mut self, source: &Path) {
        self.sources.push(source.to_path_buf());
        self.position = Duration::ZERO;
    }

    fn load(&mut self) -> Result<(), MediaError> {
        if self.fail_next_load {
            self.fail_next_load = false;
            return Err(MediaError::Open {
                path: self.sources.last().cloned().unwrap_or_default(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not audio"),
            });
        }
        self.loads += 1;
        Ok(())
    }

    fn play(&mut self) {
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
    }

    fn current_time(&self) -> Duration {
        self.position
    }

    fn set_current_time(&mut self, position: Duration) {
        self.seeks.push(position);
        self.position = position;
    }

    fn duration(&self) -> Option<Duration> {
        self.total
    }
}

fn t(name: &str) -> Track {
    Track::untagged(PathBuf::from(format!("/music/{name}.mp3")), name.into())
}

fn player_with(names: &[&str]) -> Player<FakeMedia> {
    let mut p = Player::new(FakeMedia::default());
    p.add_tracks(names.iter().map(|n| t(n)).collect());
    p
}

#[test]
fn next_then_previous_restores_index() {
    let mut p = player_with(&["a", "b", "c"]);

    p.next();
    assert_eq!(p.current_index(), 1);
    p.previous();
    assert_eq!(p.current_index(), 0);

    // Wrap both ways.
    p.previous();
    assert_eq!(p.current_index(), 2);
    p.next();
    assert_eq!(p.current_index(), 0);
}

#[test]
fn transport_on_empty_sequence_is_a_noop() {
    let mut p = Player::new(FakeMedia::default());

    p.next();
    p.previous();
    p.play();
    p.toggle();
    p.seek_to(50.0);

    assert_eq!(p.current_index(), 0);
    assert_eq!(p.state(), PlaybackState::Idle);
    assert!(!p.is_playing());
    assert_eq!(p.progress(), 0.0);
}

#[test]
fn adding_tracks_appends_and_preserves_order() {
    let mut p = player_with(&["a", "b"]);
    p.add_tracks(vec![t("c"), t("d"), t("e")]);

    let titles: Vec<&str> = p.tracks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c", "d", "e"]);
    // First batch made index 0 current; the second batch must not move it.
    assert_eq!(p.current_index(), 0);
}

#[test]
fn first_added_track_becomes_current_and_loaded() {
    let mut p = Player::new(FakeMedia::default());
    assert_eq!(p.state(), PlaybackState::Idle);

    p.add_tracks(vec![t("a")]);
    assert_eq!(p.state(), PlaybackState::Loaded);
    assert_eq!(p.media().sources, vec![PathBuf::from("/music/a.mp3")]);
    // Bound but not started: no user gesture yet.
    assert_eq!(p.media().play_calls, 0);
}

#[test]
fn play_pause_play_leaves_flag_true_with_one_resume_per_toggle() {
    let mut p = player_with(&["a"]);

    p.play();
    assert!(p.is_playing());
    assert_eq!(p.state(), PlaybackState::Playing);

    p.pause();
    assert!(!p.is_playing());
    assert_eq!(p.state(), PlaybackState::Paused);

    let before = p.media().play_calls;
    p.play();
    assert!(p.is_playing());
    assert_eq!(p.media().play_calls, before + 1);
}

#[test]
fn play_while_already_playing_does_not_restart() {
    let mut p = player_with(&["a"]);
    p.play();
    let calls = p.media().play_calls;
    p.play();
    assert_eq!(p.media().play_calls, calls);
}

#[test]
fn seek_maps_percent_endpoints_to_zero_and_full_duration() {
    let mut p = player_with(&["a"]);
    p.media_mut().total = Some(Duration::from_secs(200));

    p.seek_to(0.0);
    p.seek_to(100.0);
    assert_eq!(
        p.media().seeks,
        vec![Duration::ZERO, Duration::from_secs(200)]
    );
}

#[test]
fn seek_clamps_out_of_range_percent() {
    let mut p = player_with(&["a"]);
    p.media_mut().total = Some(Duration::from_secs(100));

    p.seek_to(-20.0);
    p.seek_to(250.0);
    assert_eq!(
        p.media().seeks,
        vec![Duration::ZERO, Duration::from_secs(100)]
    );
}

#[test]
fn seek_with_unknown_duration_never_writes_the_playhead() {
    let mut p = player_with(&["a"]);
    assert!(p.media().total.is_none());

    p.seek_to(50.0);
    assert!(p.media().seeks.is_empty());
}

#[test]
fn changing_index_while_playing_rebinds_and_resumes() {
    let mut p = player_with(&["a", "b"]);
    p.play();

    let pauses_before = p.media().pause_calls;
    let plays_before = p.media().play_calls;
    p.next();

    assert!(p.media().pause_calls > pauses_before);
    assert_eq!(p.media().sources.last().unwrap(), Path::new("/music/b.mp3"));
    // Resumed without another user gesture.
    assert_eq!(p.media().play_calls, plays_before + 1);
    assert!(p.is_playing());
    assert_eq!(p.state(), PlaybackState::Playing);
}

#[test]
fn changing_index_while_paused_stays_paused() {
    let mut p = player_with(&["a", "b"]);

    p.next();
    assert_eq!(p.state(), PlaybackState::Loaded);
    assert_eq!(p.media().play_calls, 0);
}

#[test]
fn jump_to_selected_track_rebinds() {
    let mut p = player_with(&["a", "b", "c"]);
    p.set_current(2);
    assert_eq!(p.current_index(), 2);
    assert_eq!(p.media().sources.last().unwrap(), Path::new("/music/c.mp3"));

    // Re-selecting the current track does not reload it.
    let loads = p.media().loads;
    p.set_current(2);
    assert_eq!(p.media().loads, loads);

    // Out of range is ignored.
    p.set_current(99);
    assert_eq!(p.current_index(), 2);
}

#[test]
fn load_failure_surfaces_per_track_error_and_clears_flag() {
    let mut p = player_with(&["a", "b"]);
    p.play();

    p.media_mut().fail_next_load = true;
    p.next();

    let failed = &p.tracks()[1];
    assert!(failed.error.as_deref().unwrap().contains("not audio"));
    assert!(!p.is_playing());
    assert_eq!(p.state(), PlaybackState::Loaded);

    // Moving on to a good track recovers.
    p.previous();
    assert!(p.tracks()[0].error.is_none());
    assert_eq!(p.state(), PlaybackState::Loaded);
}

#[test]
fn progress_is_zero_without_duration_and_clamped_with_one() {
    let mut p = player_with(&["a"]);
    p.media_mut().position = Duration::from_secs(30);
    assert_eq!(p.progress(), 0.0);

    p.media_mut().total = Some(Duration::from_secs(120));
    assert!((p.progress() - 25.0).abs() < 1e-9);

    p.media_mut().position = Duration::from_secs(600);
    assert_eq!(p.progress(), 100.0);
}

#[test]
fn percent_guards_zero_and_unknown_duration() {
    assert_eq!(percent(Duration::from_secs(10), None), 0.0);
    assert_eq!(percent(Duration::from_secs(10), Some(Duration::ZERO)), 0.0);
    assert_eq!(
        percent(Duration::from_secs(50), Some(Duration::from_secs(100))),
        50.0
    );
}

#[test]
fn format_time_pads_seconds_not_minutes() {
    assert_eq!(format_time(65), "1:05");
    assert_eq!(format_time(5), "0:05");
    assert_eq!(format_time(600), "10:00");
    assert_eq!(format_time(0), "0:00");
}
