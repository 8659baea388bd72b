//! Geometry engine types and configuration.

use serde::{Deserialize, Serialize};

use crate::layout_mode::LayoutMode;

/// Sizing constants shared by every geometry computation.
///
/// All values are in pixels except the ratios, which are width / height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmstripGeometry {
    /// Tile aspect ratio on wide screens.
    pub tile_aspect_ratio: f64,
    /// Tile aspect ratio below `aspect_ratio_breakpoint`.
    pub square_tile_aspect_ratio: f64,
    /// Client width under which tiles become square.
    pub aspect_ratio_breakpoint: f64,
    pub tile_horizontal_margin: f64,
    pub tile_vertical_margin: f64,
    /// Width reserved for the tile grid's scrollbar.
    pub scroll_size: f64,
    /// Height cap of the horizontal strip. The vertical strip reuses it as
    /// its width cap.
    pub max_strip_height: f64,
    pub top_bottom_margin: f64,
    pub local_thumbnail_ratio: f64,
    pub remote_thumbnail_ratio: f64,
    pub vertical_min_horizontal_margin: f64,
    pub stage_view_thumbnail_horizontal_border: f64,
}

impl Default for FilmstripGeometry {
    fn default() -> Self {
        Self {
            tile_aspect_ratio: 16.0 / 9.0,
            square_tile_aspect_ratio: 1.0,
            aspect_ratio_breakpoint: 500.0,
            tile_horizontal_margin: 4.0,
            tile_vertical_margin: 4.0,
            scroll_size: 7.0,
            max_strip_height: 120.0,
            top_bottom_margin: 15.0,
            local_thumbnail_ratio: 16.0 / 9.0,
            remote_thumbnail_ratio: 1.0,
            vertical_min_horizontal_margin: 10.0,
            stage_view_thumbnail_horizontal_border: 4.0,
        }
    }
}

/// Input of a tile view sizing pass. Counts below 1 are raised to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileLayoutInput {
    pub columns: u32,
    pub min_visible_rows: u32,
    pub rows: u32,
    pub client_width: f64,
    #[serde(default)]
    pub client_height: f64,
    #[serde(default)]
    pub disable_responsive_tiles: bool,
}

/// Column/row arrangement of the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    pub columns: u32,
    /// Rows that must fit on screen without scrolling.
    pub min_visible_rows: u32,
    pub rows: u32,
}

/// A full layout pass request: which layout, how much room, how many people.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub mode: LayoutMode,
    pub client_width: f64,
    #[serde(default)]
    pub client_height: f64,
    pub participant_count: u32,
    pub max_columns: u32,
    #[serde(default)]
    pub disable_responsive_tiles: bool,
}
