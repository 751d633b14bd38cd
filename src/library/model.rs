use std::path::PathBuf;
use std::time::Duration;

/// A single playable audio unit with display metadata and a source reference.
#[derive(Clone)]
pub struct Track {
    /// Path to the playable audio data. Process-local; not a durable URL.
    pub source: PathBuf,
    /// Display title; the file stem when the tags carry none.
    pub title: String,
    /// Display artist; `"Unknown Artist"` when the tags carry none.
    pub artist: String,
    /// Duration as reported by the tags, when known.
    pub duration: Option<Duration>,
    /// Embedded cover-art bytes, when the file carries a picture.
    pub artwork: Option<Vec<u8>>,
    /// Load failure recorded the last time this track was bound, if any.
    pub error: Option<String>,
}

impl Track {
    /// Build a bare track for `source` with placeholder metadata.
    pub fn untagged(source: PathBuf, title: String) -> Self {
        Self {
            source,
            title,
            artist: "Unknown Artist".to_string(),
            duration: None,
            artwork: None,
            error: None,
        }
    }
}
