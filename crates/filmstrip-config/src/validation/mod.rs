//! Full configuration validation.
//!
//! Validates all numeric ranges. Each section has its own validator; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod helpers;
mod strip;
mod tile_view;


use crate::schema::FilmstripConfig;
use filmstrip_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FilmstripConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    tile_view::validate_tile_view(&mut errors, config);
    strip::validate_strip(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
