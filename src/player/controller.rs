use std::time::Duration;

use crate::library::Track;
use crate::media::MediaElement;

use super::progress;

/// The playback state of the current track slot.
///
/// `Idle` while no tracks exist; `Loaded` right after a track becomes current
/// but before playback starts. Any index change returns to `Loaded`, then
/// immediately to `Playing` when the play flag is set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Loaded,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Idle
    }
}

/// The playback controller: track sequence, current index, play flag and the
/// media element it exclusively owns.
pub struct Player<M: MediaElement> {
    tracks: Vec<Track>,
    current: usize,
    playing: bool,
    state: PlaybackState,
    media: M,
}

impl<M: MediaElement> Player<M> {
    pub fn new(media: M) -> Self {
        Self {
            tracks: Vec::new(),
            current: 0,
            playing: false,
            state: PlaybackState::Idle,
            media,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Index of the current track. Meaningless while the sequence is empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// The play/pause flag the transport icon reflects.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub(crate) fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Append tracks, preserving prior entries and their order.
    ///
    /// When the sequence was empty, the first appended track implicitly
    /// becomes current and is bound to the element.
    pub fn add_tracks(&mut self, new_tracks: Vec<Track>) {
        if new_tracks.is_empty() {
            return;
        }

        let was_empty = self.tracks.is_empty();
        self.tracks.extend(new_tracks);

        if was_empty {
            self.current = 0;
            self.sync();
        }
    }

    /// Start or resume playback of the current track.
    pub fn play(&mut self) {
        if self.tracks.is_empty() {
            return;
        }

        self.playing = true;
        match self.state {
            PlaybackState::Loaded | PlaybackState::Paused => {
                self.media.play();
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Playing => {}
            // Unreachable with a non-empty sequence; kept total.
            PlaybackState::Idle => {}
        }
    }

    /// Suspend playback, keeping the playhead where it is.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.media.pause();
            self.state = PlaybackState::Paused;
        }
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance to the next track, wrapping past the end. No-op when empty.
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }

        let next = (self.current + 1) % self.tracks.len();
        if next != self.current {
            self.current = next;
            self.sync();
        }
    }

    /// Step back to the previous track, wrapping at 0. No-op when empty.
    pub fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }

        let prev = if self.current == 0 {
            self.tracks.len() - 1
        } else {
            self.current - 1
        };
        if prev != self.current {
            self.current = prev;
            self.sync();
        }
    }

    /// Jump to a specific track index. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index >= self.tracks.len()
            || (index == self.current && self.state != PlaybackState::Idle)
        {
            return;
        }
        self.current = index;
        self.sync();
    }

    /// Move the playhead to `percent` of the track's duration.
    ///
    /// The percent is clamped to `[0, 100]`; while the duration is unknown or
    /// zero this is a no-op so the element never receives an invalid time.
    pub fn seek_to(&mut self, percent: f64) {
        let Some(total) = self.media.duration() else {
            return;
        };
        if total.is_zero() {
            return;
        }

        let percent = percent.clamp(0.0, 100.0);
        self.media
            .set_current_time(total.mul_f64(percent / 100.0));
    }

    /// Normalized progress in `[0, 100]`, 0 while nothing meaningful is
    /// loaded.
    pub fn progress(&self) -> f64 {
        if self.state == PlaybackState::Idle {
            return 0.0;
        }
        progress::percent(self.media.current_time(), self.media.duration())
    }

    /// Elapsed playhead time of the current track.
    pub fn elapsed(&self) -> Duration {
        self.media.current_time()
    }

    /// Duration of the current track: the element's report, falling back to
    /// the tagged value.
    pub fn duration(&self) -> Option<Duration> {
        self.media
            .duration()
            .or_else(|| self.current_track().and_then(|t| t.duration))
    }

    /// Transition handler run after every change of the current index.
    ///
    /// Stops whatever was playing, binds and loads the new source, and
    /// resumes only if the play flag was already set. A load failure is
    /// recorded on the track and leaves the widget paused but functional.
    fn sync(&mut self) {
        self.media.pause();

        let track = &self.tracks[self.current];
        self.media.set_source(&track.source);

        match self.media.load() {
            Ok(()) => {
                self.tracks[self.current].error = None;
                self.state = PlaybackState::Loaded;
                if self.playing {
                    self.media.play();
                    self.state = PlaybackState::Playing;
                }
            }
            Err(e) => {
                self.tracks[self.current].error = Some(e.to_string());
                self.playing = false;
                self.state = PlaybackState::Loaded;
            }
        }
    }
}
