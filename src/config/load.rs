use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `COVERLIST__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("COVERLIST")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !lists_an_extension(&self.library.audio_extensions) {
            return Err("library.audio_extensions must list at least one extension".to_string());
        }
        if !lists_an_extension(&self.library.cover_extensions) {
            return Err("library.cover_extensions must list at least one extension".to_string());
        }
        if self.manifest.fallback_cover.trim().is_empty() {
            return Err("manifest.fallback_cover must not be empty".to_string());
        }
        if !crate::render::is_valid_timestamp_format(&self.html.timestamp_format) {
            return Err(format!(
                "html.timestamp_format is not a valid strftime pattern: {}",
                self.html.timestamp_format
            ));
        }
        Ok(())
    }
}

fn lists_an_extension(exts: &[String]) -> bool {
    exts.iter().any(|e| !e.trim().trim_start_matches('.').is_empty())
}

/// Resolve the config path from `COVERLIST_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("COVERLIST_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/coverlist/config.toml`
/// or `~/.config/coverlist/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("coverlist").join("config.toml"))
}
