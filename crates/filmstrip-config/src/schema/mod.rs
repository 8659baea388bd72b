//! Configuration schema types for the filmstrip layout engine.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock conference UI values.

mod strip;
mod system;
mod tile_view;

pub use strip::*;
pub use system::*;
pub use tile_view::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FilmstripConfig {
    pub tile_view: TileViewConfig,
    pub filmstrip: StripConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
