//! Filmstrip configuration system.
//!
//! Provides TOML-based configuration for the layout engine with full
//! validation. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use filmstrip_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{FilmstripConfig, CONFIG_SCHEMA_VERSION};

use filmstrip_common::ConfigError;
use std::path::Path;

/// Load config from `path` when given, otherwise from the platform default
/// path, and validate the result.
///
/// Unlike [`toml_loader::load_from_path`], invalid values are an error here.
pub fn load_config(path: Option<&Path>) -> Result<FilmstripConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FilmstripConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
