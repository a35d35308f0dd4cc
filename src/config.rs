//! Configuration loader and schema types.
//!
//! This module exposes the settings that locate the music folder and output
//! files, plus helpers to load them from disk and the environment.

mod load;
mod schema;

pub use schema::*;
