//! Tile view validation (aspect ratios, breakpoint, margins, scrollbar, columns).

use crate::schema::FilmstripConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_tile_view(errors: &mut Vec<String>, config: &FilmstripConfig) {
    let tile = &config.tile_view;
    validate_range_f64(errors, "tile_view.aspect_ratio", tile.aspect_ratio, 0.1, 10.0);
    validate_range_f64(
        errors,
        "tile_view.square_aspect_ratio",
        tile.square_aspect_ratio,
        0.1,
        10.0,
    );
    validate_range(
        errors,
        "tile_view.aspect_ratio_breakpoint",
        tile.aspect_ratio_breakpoint,
        0,
        10_000,
    );
    validate_range(
        errors,
        "tile_view.horizontal_margin",
        tile.horizontal_margin,
        0,
        100,
    );
    validate_range(errors, "tile_view.vertical_margin", tile.vertical_margin, 0, 100);
    validate_range(errors, "tile_view.scroll_size", tile.scroll_size, 0, 50);
    validate_range(errors, "tile_view.max_columns", tile.max_columns, 1, 10);
}
