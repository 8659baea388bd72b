//! Thumbnail geometry for the three filmstrip layouts.

mod grid;
mod strip;
mod tile;
mod types;

pub use grid::tile_grid_dimensions;
pub use types::*;

use filmstrip_common::{StripSizes, ThumbnailSize};
use serde::{Deserialize, Serialize};

use crate::layout_mode::LayoutMode;

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum LayoutOutcome {
    Strip {
        mode: LayoutMode,
        sizes: StripSizes,
    },
    Tile {
        grid: TileGrid,
        size: ThumbnailSize,
    },
}

impl FilmstripGeometry {
    /// Run the sizing that matches `request.mode`.
    pub fn layout(&self, request: &LayoutRequest) -> LayoutOutcome {
        match request.mode {
            LayoutMode::HorizontalFilmstrip => LayoutOutcome::Strip {
                mode: request.mode,
                sizes: self.size_for_horizontal(request.client_height),
            },
            LayoutMode::VerticalFilmstrip => LayoutOutcome::Strip {
                mode: request.mode,
                sizes: self.size_for_vertical(request.client_width),
            },
            LayoutMode::TileView => {
                let grid = tile_grid_dimensions(request.participant_count, request.max_columns);
                let size = self.size_for_tile(&TileLayoutInput {
                    columns: grid.columns,
                    min_visible_rows: grid.min_visible_rows,
                    rows: grid.rows,
                    client_width: request.client_width,
                    client_height: request.client_height,
                    disable_responsive_tiles: request.disable_responsive_tiles,
                });
                LayoutOutcome::Tile { grid, size }
            }
        }
    }
}
