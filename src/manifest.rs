//! Playlist manifest: joining audio files with covers and writing JSON.

mod build;
mod model;
mod write;

pub use build::{BuildOptions, build};
pub use model::Track;
pub use write::write;

#[cfg(test)]
mod tests;
