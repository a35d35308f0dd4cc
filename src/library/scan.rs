use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, PathSettings};
use crate::error::{Error, Result};

use super::model::{AudioFile, CoverIndex, ScanOutcome, join_web_path, normalized_name};

/// Create the music and covers directories when the music directory is absent.
///
/// Returns `true` when anything was created. An existing music directory is
/// left alone even if the covers directory is missing.
pub fn ensure_dirs(paths: &PathSettings) -> Result<bool> {
    if paths.music_dir.exists() {
        return Ok(false);
    }

    info!(dir = %paths.music_dir.display(), "music directory not found, creating it");
    for dir in [&paths.music_dir, &paths.covers_dir] {
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(true)
}

/// Whether the file name of `path` ends in `.<ext>` for one of `extensions`
/// (case-insensitive, leading dot optional). A bare `.mp3` counts.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
        return false;
    };
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .any(|e| !e.is_empty() && name.ends_with(&format!(".{e}")))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Regular files directly inside `dir`, in directory listing order.
fn list_files(dir: &Path, include_hidden: bool) -> ScanOutcome<Vec<PathBuf>> {
    if !dir.exists() {
        return ScanOutcome::Missing;
    }
    if !dir.is_dir() {
        return ScanOutcome::Unreadable(format!("{} is not a directory", dir.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 means the directory itself could not be read.
            Err(err) if err.depth() == 0 => return ScanOutcome::Unreadable(err.to_string()),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && (include_hidden || !is_hidden(path)) {
            files.push(path.to_path_buf());
        }
    }
    ScanOutcome::Found(files)
}

/// List audio files in `dir`. Order is whatever the directory listing yields.
pub fn list_audio(dir: &Path, settings: &LibrarySettings) -> ScanOutcome<Vec<AudioFile>> {
    match list_files(dir, settings.include_hidden) {
        ScanOutcome::Found(paths) => ScanOutcome::Found(
            paths
                .into_iter()
                .filter(|p| has_extension(p, &settings.audio_extensions))
                .filter_map(|p| {
                    let name = p.file_name()?.to_string_lossy().into_owned();
                    Some(AudioFile {
                        path: dir.join(&name),
                        name,
                    })
                })
                .collect(),
        ),
        ScanOutcome::Missing => ScanOutcome::Missing,
        ScanOutcome::Unreadable(reason) => ScanOutcome::Unreadable(reason),
    }
}

/// Index cover images in `dir` by normalized name.
pub fn index_covers(dir: &Path, settings: &LibrarySettings) -> ScanOutcome<CoverIndex> {
    let paths = match list_files(dir, settings.include_hidden) {
        ScanOutcome::Found(paths) => paths,
        ScanOutcome::Missing => return ScanOutcome::Missing,
        ScanOutcome::Unreadable(reason) => return ScanOutcome::Unreadable(reason),
    };

    let mut index = CoverIndex::new();
    for path in paths
        .iter()
        .filter(|p| has_extension(p, &settings.cover_extensions))
    {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        index.insert(normalized_name(&name), join_web_path(dir, &name));
    }
    ScanOutcome::Found(index)
}
