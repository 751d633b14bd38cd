//! Rodio-backed media element.
//!
//! Wraps an output stream and a `Sink` behind the `MediaElement` trait. One
//! sink exists at a time; rebinding a source stops and drops the previous one,
//! which releases its decoded data.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::element::{MediaElement, MediaError};

pub struct RodioMedia {
    stream: OutputStream,
    sink: Option<Sink>,
    source: Option<PathBuf>,
    total: Option<Duration>,
}

impl RodioMedia {
    /// Open the default output device.
    pub fn new() -> Result<Self, MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            source: None,
            total: None,
        })
    }
}

impl MediaElement for RodioMedia {
    fn set_source(&mut self, source: &Path) {
        // Stop and drop the old sink first so its source is released before
        // the new one is decoded.
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.source = Some(source.to_path_buf());
        self.total = None;
    }

    fn load(&mut self) -> Result<(), MediaError> {
        let path = self.source.clone().ok_or(MediaError::NoSource)?;

        let file = File::open(&path).map_err(|source| MediaError::Open {
            path: path.clone(),
            source,
        })?;
        let decoded =
            Decoder::new(BufReader::new(file)).map_err(|source| MediaError::Decode {
                path: path.clone(),
                source,
            })?;
        self.total = decoded.total_duration();

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(decoded);
        sink.pause();
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn current_time(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|s| s.get_pos())
            .unwrap_or(Duration::ZERO)
    }

    fn set_current_time(&mut self, position: Duration) {
        if let Some(s) = self.sink.as_ref() {
            // Some decoders cannot seek; treat that as a no-op.
            let _ = s.try_seek(position);
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.total
    }
}
