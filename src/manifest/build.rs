use std::path::Path;

use crate::config::Settings;
use crate::library::{AudioFile, CoverIndex, has_extension, join_web_path, strip_last_extension};

use super::model::{Playlist, Track};

/// Inputs for [`build`] that come from settings rather than the scan.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions<'a> {
    pub music_dir: &'a Path,
    pub audio_extensions: &'a [String],
    pub singer: &'a str,
    pub fallback_cover: &'a str,
}

impl<'a> BuildOptions<'a> {
    pub fn from_settings(settings: &'a Settings) -> Self {
        Self {
            music_dir: &settings.paths.music_dir,
            audio_extensions: &settings.library.audio_extensions,
            singer: &settings.manifest.singer,
            fallback_cover: &settings.manifest.fallback_cover,
        }
    }
}

/// File name without its audio extension; other names pass through untouched.
pub fn display_name<'n>(file_name: &'n str, audio_extensions: &[String]) -> &'n str {
    if !has_extension(Path::new(file_name), audio_extensions) {
        return file_name;
    }
    strip_last_extension(file_name)
}

/// Join audio files with covers. Ids follow the order of `files`.
pub fn build(files: &[AudioFile], covers: &CoverIndex, opts: &BuildOptions<'_>) -> Playlist {
    files
        .iter()
        .zip(1u32..)
        .map(|(file, id)| {
            let name = display_name(&file.name, opts.audio_extensions);
            let cover = covers
                .get(&name.to_lowercase())
                .unwrap_or(opts.fallback_cover);

            Track {
                id,
                name: name.to_string(),
                singer: opts.singer.to_string(),
                cover: cover.to_string(),
                music_src: join_web_path(opts.music_dir, &file.name),
                file_name: file.name.clone(),
            }
        })
        .collect()
}
