use std::path::{Path, PathBuf};

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Check whether `path` has one of the configured audio extensions.
pub fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Expand one user-supplied path into the audio files it denotes.
///
/// A file is returned as-is when it passes the extension filter; a directory
/// is walked according to the library settings. Entries come back in a stable
/// sorted order so imports are reproducible.
pub fn collect_audio_paths(input: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    if input.is_file() {
        if is_audio_file(input, settings) {
            return vec![input.to_path_buf()];
        }
        return Vec::new();
    }

    let mut walker = WalkDir::new(input).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut paths: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| {
            let path = e.path();
            path.is_file()
                && (settings.include_hidden || !is_hidden(path))
                && is_audio_file(path, settings)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort();
    paths
}

/// Build a `Track` for a single audio file.
///
/// Title and artist come from the tags when present, else the file stem and
/// the `"Unknown Artist"` placeholder. Embedded cover art and the tagged
/// duration are carried along when the file has them; tag-read failures fall
/// back to the placeholders rather than rejecting the file.
pub fn track_from_file(path: &Path) -> Track {
    let default_title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let mut track = Track::untagged(path.to_path_buf(), default_title);

    if let Ok(tagged) = Probe::open(path).and_then(|p| p.read()) {
        track.duration = Some(tagged.properties().duration());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                if !v.trim().is_empty() {
                    track.title = v.trim().to_string();
                }
            }
            if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                if !v.trim().is_empty() {
                    track.artist = v.trim().to_string();
                }
            }
            track.artwork = tag.pictures().first().map(|pic| pic.data().to_vec());
        }
    }

    track
}

/// Turn a batch of user-supplied paths into tracks, in input order.
pub fn import_paths(inputs: &[PathBuf], settings: &LibrarySettings) -> Vec<Track> {
    inputs
        .iter()
        .flat_map(|p| collect_audio_paths(p, settings))
        .map(|p| track_from_file(&p))
        .collect()
}
