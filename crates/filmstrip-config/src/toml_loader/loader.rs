//! Core TOML config loading: read from path or platform default.

use crate::schema::FilmstripConfig;
use crate::validation;
use filmstrip_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<FilmstripConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: FilmstripConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/filmstrip/config.toml`
/// On Linux: `~/.config/filmstrip/config.toml`
///
/// If the config directory cannot be determined, defaults are returned.
/// Otherwise behaves like [`load_or_create`].
pub fn load_default() -> Result<FilmstripConfig, ConfigError> {
    match default_config_path() {
        Ok(path) => load_or_create(&path),
        Err(e) => {
            warn!("{e}, using default config");
            Ok(FilmstripConfig::default())
        }
    }
}

/// Load config from `path`, writing the default template there when missing.
///
/// I/O failures (unreadable file, unusable directory, failed write) are
/// logged and fall back to defaults. Only a file that exists but does not
/// parse is an error.
pub fn load_or_create(path: &Path) -> Result<FilmstripConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(path) {
                warn!("{e}, using default config");
            }
            Ok(FilmstripConfig::default())
        }
        Err(ConfigError::Io(msg)) => {
            warn!("{msg}, using default config");
            Ok(FilmstripConfig::default())
        }
        Err(e) => Err(e),
    }
}
