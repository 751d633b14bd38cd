use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while binding or decoding a source.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no audio output device available: {0}")]
    Device(#[from] rodio::StreamError),
    #[error("failed to open {path}: {source}")]
    Open {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: std::path::PathBuf,
        source: rodio::decoder::DecoderError,
    },
    #[error("load called with no source bound")]
    NoSource,
}

/// The single imperative playback primitive the controller drives.
///
/// Mirrors the surface of a native audio element: bind a source, load it,
/// start/stop, and read or move the playhead. The controller owns the element
/// exclusively; nothing else writes to it. Time updates are polled rather
/// than delivered by callback.
pub trait MediaElement {
    /// Bind a new source. Any previously loaded source is released.
    fn set_source(&mut self, source: &Path);

    /// Decode the bound source and prepare it for playback, paused.
    fn load(&mut self) -> Result<(), MediaError>;

    /// Resume or start playback of the loaded source.
    fn play(&mut self);

    /// Suspend playback, keeping the playhead where it is.
    fn pause(&mut self);

    /// Current playhead position. Zero when nothing is loaded.
    fn current_time(&self) -> Duration;

    /// Move the playhead to an absolute position. Best effort: positions the
    /// source cannot seek to are ignored.
    fn set_current_time(&mut self, position: Duration);

    /// Total duration of the loaded source, when the decoder knows it.
    fn duration(&self) -> Option<Duration>;
}
