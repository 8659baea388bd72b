//! Tile view (grid) configuration types.

use serde::{Deserialize, Serialize};

/// Tile grid sizing knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TileViewConfig {
    /// Width / height of a tile on wide screens (valid range: 0.1-10.0).
    #[serde(alias = "tileAspectRatio")]
    pub aspect_ratio: f64,
    /// Width / height of a tile below the breakpoint (valid range: 0.1-10.0).
    #[serde(alias = "squareTileAspectRatio")]
    pub square_aspect_ratio: f64,
    /// Client width in pixels under which square tiles are used (valid range: 0-10000).
    #[serde(alias = "aspectRatioBreakpoint")]
    pub aspect_ratio_breakpoint: u32,
    /// Horizontal margin around each tile in pixels (valid range: 0-100).
    #[serde(alias = "tileHorizontalMargin")]
    pub horizontal_margin: u32,
    /// Vertical margin around each tile in pixels (valid range: 0-100).
    #[serde(alias = "tileVerticalMargin")]
    pub vertical_margin: u32,
    /// Width reserved for a scrollbar in pixels (valid range: 0-50).
    #[serde(alias = "scrollSize")]
    pub scroll_size: u32,
    /// Upper bound for grid columns (valid range: 1-10).
    pub max_columns: u32,
    /// Always use `aspect_ratio`, ignoring the breakpoint.
    pub disable_responsive_tiles: bool,
}

impl Default for TileViewConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            square_aspect_ratio: 1.0,
            aspect_ratio_breakpoint: 500,
            horizontal_margin: 4,
            vertical_margin: 4,
            scroll_size: 7,
            max_columns: 5,
            disable_responsive_tiles: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
