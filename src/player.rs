//! Playback controller and progress reporting.
//!
//! `Player` owns the track sequence, the current index, the play/pause flag
//! and the media element, and is the only writer to that element. Progress
//! helpers live in `player::progress`.

mod controller;
pub mod progress;

pub use controller::{PlaybackState, Player};

#[cfg(test)]
mod tests;
