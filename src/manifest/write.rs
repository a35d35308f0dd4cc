use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::model::Track;

/// Pretty-printed JSON with 2-space indentation.
pub fn to_json(playlist: &[Track]) -> Result<String> {
    Ok(serde_json::to_string_pretty(playlist)?)
}

/// Overwrite `path` with the manifest.
pub fn write(playlist: &[Track], path: &Path) -> Result<()> {
    let json = to_json(playlist)?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
