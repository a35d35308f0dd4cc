use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An audio file found in the music directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// File name including its extension.
    pub name: String,
    /// The music directory joined with `name`.
    pub path: PathBuf,
}

/// Cover images keyed by normalized name (see [`normalized_name`]).
///
/// Values are the cover paths as they should appear in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverIndex {
    covers: HashMap<String, String>,
}

impl CoverIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cover; a later file with the same key replaces the earlier one.
    pub fn insert(&mut self, key: String, path: String) {
        self.covers.insert(key, path);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.covers.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }
}

/// Result of listing a directory.
///
/// Callers usually fall back to an empty value for anything but `Found`, but
/// the variants keep "missing" and "unreadable" apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome<T> {
    Found(T),
    /// The directory does not exist.
    Missing,
    /// The directory exists but could not be listed.
    Unreadable(String),
}

impl<T: Default> ScanOutcome<T> {
    pub fn unwrap_or_empty(self) -> T {
        match self {
            ScanOutcome::Found(v) => v,
            ScanOutcome::Missing | ScanOutcome::Unreadable(_) => T::default(),
        }
    }
}

/// `file_name` without the text from its last dot onwards. A trailing dot
/// with nothing after it is kept; a leading dot is not special.
pub fn strip_last_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(i) if i + 1 < file_name.len() => &file_name[..i],
        _ => file_name,
    }
}

/// Lowercased file name with its final extension removed.
pub fn normalized_name(file_name: &str) -> String {
    strip_last_extension(file_name).to_lowercase()
}

/// Join a directory and a file name with `/`, keeping the directory exactly
/// as configured (so `./music` stays `./music`).
pub fn join_web_path(dir: &Path, name: &str) -> String {
    let dir = dir.to_string_lossy();
    let trimmed = dir.trim_end_matches('/');
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{trimmed}/{name}")
    }
}
