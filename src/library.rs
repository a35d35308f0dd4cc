//! Music folder scanning: directory setup, audio listing and cover indexing.

mod model;
mod scan;

pub use model::{AudioFile, CoverIndex, ScanOutcome, join_web_path, strip_last_extension};
pub use scan::{ensure_dirs, has_extension, index_covers, list_audio};
