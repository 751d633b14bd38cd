//! Track list types and the file import path.
//!
//! `library::import` turns user-supplied paths (the "load files" surface)
//! into `Track` values; the player appends them to its sequence.

mod import;
mod model;

pub use import::{collect_audio_paths, import_paths, is_audio_file, track_from_file};
pub use model::Track;
