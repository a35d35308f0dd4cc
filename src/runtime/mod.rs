use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::library::{self, ScanOutcome};
use crate::manifest::{self, BuildOptions};
use crate::render;

mod logging;
mod settings;

/// What a single generation pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub created_dirs: bool,
    pub tracks: usize,
    pub covers: usize,
}

pub fn run() -> anyhow::Result<()> {
    logging::init();
    let settings = settings::load_settings();
    let summary = generate(&settings, &Local::now())?;
    debug!(
        created_dirs = summary.created_dirs,
        tracks = summary.tracks,
        covers = summary.covers,
        "run finished"
    );
    Ok(())
}

/// Scan, build and write both outputs. Listing failures are logged and
/// treated as empty; directory creation and output writes are fatal.
pub fn generate(settings: &Settings, generated_at: &DateTime<Local>) -> Result<RunSummary> {
    let paths = &settings.paths;
    info!(dir = %paths.music_dir.display(), "scanning music folder");

    let created_dirs = library::ensure_dirs(paths)?;

    let audio = library::list_audio(&paths.music_dir, &settings.library);
    match &audio {
        ScanOutcome::Found(_) => {}
        ScanOutcome::Missing => {
            warn!(dir = %paths.music_dir.display(), "music folder not found");
        }
        ScanOutcome::Unreadable(reason) => {
            warn!(dir = %paths.music_dir.display(), "failed to read music folder: {reason}");
        }
    }
    let files = audio.unwrap_or_empty();
    info!("found {} audio files", files.len());
    for file in &files {
        debug!(path = %file.path.display(), "audio file");
    }

    let indexed = library::index_covers(&paths.covers_dir, &settings.library);
    match &indexed {
        ScanOutcome::Found(covers) => info!("found {} covers", covers.len()),
        ScanOutcome::Missing => {
            warn!(dir = %paths.covers_dir.display(), "covers folder not found");
        }
        ScanOutcome::Unreadable(reason) => {
            warn!(dir = %paths.covers_dir.display(), "failed to read covers folder: {reason}");
        }
    }
    let covers = indexed.unwrap_or_empty();
    if covers.is_empty() && !files.is_empty() {
        info!("no covers available, every track uses the fallback cover");
    }

    let playlist = manifest::build(&files, &covers, &BuildOptions::from_settings(settings));

    manifest::write(&playlist, &paths.manifest_path)?;
    info!(
        "playlist saved to {} ({} tracks)",
        paths.manifest_path.display(),
        playlist.len()
    );

    render::write_html(&playlist, &settings.html, generated_at, &paths.html_path)?;
    info!("HTML preview written to {}", paths.html_path.display());

    Ok(RunSummary {
        created_dirs,
        tracks: playlist.len(),
        covers: covers.len(),
    })
}
