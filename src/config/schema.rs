use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/coverlist/config.toml` or `~/.config/coverlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `COVERLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub library: LibrarySettings,
    pub manifest: ManifestSettings,
    pub html: HtmlSettings,
}

/// Input directories and output files. All relative paths resolve against the
/// working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory holding the audio files.
    pub music_dir: PathBuf,
    /// Directory holding cover images, usually nested in `music_dir`.
    pub covers_dir: PathBuf,
    /// Where the JSON manifest is written.
    pub manifest_path: PathBuf,
    /// Where the HTML preview is written.
    pub html_path: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            music_dir: PathBuf::from("./music"),
            covers_dir: PathBuf::from("./music/covers"),
            manifest_path: PathBuf::from("./playlist.json"),
            html_path: PathBuf::from("./playlist-view.html"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub audio_extensions: Vec<String>,
    /// File extensions to treat as cover images (case-insensitive, without dot).
    pub cover_extensions: Vec<String>,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            audio_extensions: vec!["mp3".into()],
            cover_extensions: vec!["jpg".into(), "jpeg".into(), "png".into(), "gif".into()],
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Performer written into every track; filenames carry no artist.
    pub singer: String,
    /// Cover used when no image in the covers directory matches a track.
    pub fallback_cover: String,
}

pub const DEFAULT_FALLBACK_COVER: &str =
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop";

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            singer: "Unknown artist".to_string(),
            fallback_cover: DEFAULT_FALLBACK_COVER.to_string(),
        }
    }
}

/// Labels and formatting for the HTML preview page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HtmlSettings {
    /// Page title prefix; the track count is appended.
    pub title: String,
    pub heading: String,
    pub count_label: String,
    pub singer_label: String,
    pub file_label: String,
    pub generated_label: String,
    /// `chrono` strftime pattern for the generation timestamp.
    pub timestamp_format: String,
}

impl Default for HtmlSettings {
    fn default() -> Self {
        Self {
            title: "Playlist".to_string(),
            heading: "Music playlist".to_string(),
            count_label: "Total tracks".to_string(),
            singer_label: "Artist".to_string(),
            file_label: "File".to_string(),
            generated_label: "Generated automatically".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}
