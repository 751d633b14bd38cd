use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunecard/config.toml` or
/// `~/.config/tunecard/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNECARD__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Title shown on the card while no track is loaded.
    pub placeholder_title: String,

    /// Artist shown on the card while no track is loaded.
    pub placeholder_artist: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ tunecard ~ ".to_string(),
            placeholder_title: "Audio Title".to_string(),
            placeholder_artist: "Person Name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// How far one seek keypress moves the playhead, as a percentage of the
    /// track duration.
    pub seek_step_percent: f64,

    /// How often the playhead position is polled for redraw (milliseconds).
    pub poll_ms: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_percent: 5.0,
            poll_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when expanding directories.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
