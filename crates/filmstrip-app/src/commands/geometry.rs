//! Sizing subcommands.

use filmstrip_common::Result;
use filmstrip_config::FilmstripConfig;
use filmstrip_layout::{current_layout, FilmstripGeometry, LayoutMode, LayoutRequest};
use tracing::debug;

/// Map the loaded config onto the engine's sizing constants.
pub fn geometry_from_config(config: &FilmstripConfig) -> FilmstripGeometry {
    let tile = &config.tile_view;
    let strip = &config.filmstrip;
    FilmstripGeometry {
        tile_aspect_ratio: tile.aspect_ratio,
        square_tile_aspect_ratio: tile.square_aspect_ratio,
        aspect_ratio_breakpoint: f64::from(tile.aspect_ratio_breakpoint),
        tile_horizontal_margin: f64::from(tile.horizontal_margin),
        tile_vertical_margin: f64::from(tile.vertical_margin),
        scroll_size: f64::from(tile.scroll_size),
        max_strip_height: f64::from(strip.max_height),
        top_bottom_margin: f64::from(strip.top_bottom_margin),
        local_thumbnail_ratio: strip.local_thumbnail_ratio,
        remote_thumbnail_ratio: strip.remote_thumbnail_ratio,
        vertical_min_horizontal_margin: f64::from(strip.vertical_min_horizontal_margin),
        stage_view_thumbnail_horizontal_border: f64::from(
            strip.stage_view_thumbnail_horizontal_border,
        ),
    }
}

fn run_layout(config: &FilmstripConfig, request: LayoutRequest) -> Result<String> {
    let outcome = geometry_from_config(config).layout(&request);
    debug!(mode = %request.mode, ?outcome, "layout pass");
    super::to_json(&outcome)
}

fn request(config: &FilmstripConfig, mode: LayoutMode) -> LayoutRequest {
    LayoutRequest {
        mode,
        client_width: 0.0,
        client_height: 0.0,
        participant_count: 1,
        max_columns: config.tile_view.max_columns,
        disable_responsive_tiles: config.tile_view.disable_responsive_tiles,
    }
}

pub fn tile(
    config: &FilmstripConfig,
    width: f64,
    height: f64,
    participants: u32,
    max_columns: Option<u32>,
) -> Result<String> {
    let mut request = request(config, LayoutMode::TileView);
    request.client_width = width;
    request.client_height = height;
    request.participant_count = participants;
    if let Some(max_columns) = max_columns {
        request.max_columns = max_columns;
    }
    run_layout(config, request)
}

pub fn horizontal(config: &FilmstripConfig, height: f64) -> Result<String> {
    let mut request = request(config, LayoutMode::HorizontalFilmstrip);
    request.client_height = height;
    run_layout(config, request)
}

pub fn vertical(config: &FilmstripConfig, width: f64) -> Result<String> {
    let mut request = request(config, LayoutMode::VerticalFilmstrip);
    request.client_width = width;
    run_layout(config, request)
}

pub fn layout(
    config: &FilmstripConfig,
    width: f64,
    height: f64,
    participants: u32,
    tile_view: bool,
    vertical: Option<bool>,
) -> Result<String> {
    let mode = current_layout(tile_view, vertical.unwrap_or(config.filmstrip.vertical));
    let mut request = request(config, mode);
    request.client_width = width;
    request.client_height = height;
    request.participant_count = participants;
    run_layout(config, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn default_config_maps_to_default_geometry() {
        let geometry = geometry_from_config(&FilmstripConfig::default());
        assert_eq!(geometry, FilmstripGeometry::default());
    }

    #[test]
    fn config_overrides_reach_geometry() {
        let mut config = FilmstripConfig::default();
        config.filmstrip.max_height = 90;
        config.tile_view.scroll_size = 0;
        let geometry = geometry_from_config(&config);
        assert!((geometry.max_strip_height - 90.0).abs() < f64::EPSILON);
        assert!(geometry.scroll_size.abs() < f64::EPSILON);
    }

    #[test]
    fn horizontal_prints_strip_sizes() {
        let out = parse(&horizontal(&FilmstripConfig::default(), 720.0).unwrap());
        assert_eq!(out["layout"], "strip");
        assert_eq!(out["mode"], "horizontal-filmstrip");
        assert_eq!(out["sizes"]["local"]["width"], 213);
        assert_eq!(out["sizes"]["local"]["height"], 120);
        assert_eq!(out["sizes"]["remote"]["width"], 120);
    }

    #[test]
    fn vertical_prints_strip_sizes() {
        let out = parse(&vertical(&FilmstripConfig::default(), 1280.0).unwrap());
        assert_eq!(out["mode"], "vertical-filmstrip");
        assert_eq!(out["sizes"]["local"]["width"], 120);
        assert_eq!(out["sizes"]["local"]["height"], 67);
    }

    #[test]
    fn tile_prints_grid_and_size() {
        let out = parse(&tile(&FilmstripConfig::default(), 1280.0, 720.0, 4, None).unwrap());
        assert_eq!(out["layout"], "tile");
        assert_eq!(out["grid"]["columns"], 2);
        assert_eq!(out["grid"]["rows"], 2);
        assert_eq!(out["size"]["width"], 632);
        assert_eq!(out["size"]["height"], 356);
    }

    #[test]
    fn tile_max_columns_override() {
        let out = parse(&tile(&FilmstripConfig::default(), 1280.0, 720.0, 4, Some(1)).unwrap());
        assert_eq!(out["grid"]["columns"], 1);
        assert_eq!(out["grid"]["rows"], 4);
    }

    #[test]
    fn layout_follows_config_orientation() {
        let mut config = FilmstripConfig::default();
        config.filmstrip.vertical = true;
        let out = parse(&layout(&config, 1280.0, 720.0, 3, false, None).unwrap());
        assert_eq!(out["mode"], "vertical-filmstrip");

        let out = parse(&layout(&config, 1280.0, 720.0, 3, true, None).unwrap());
        assert_eq!(out["layout"], "tile");
    }

    #[test]
    fn layout_flag_overrides_config_orientation() {
        let mut config = FilmstripConfig::default();
        config.filmstrip.vertical = true;
        let out = parse(&layout(&config, 1280.0, 720.0, 3, false, Some(false)).unwrap());
        assert_eq!(out["mode"], "horizontal-filmstrip");

        let config = FilmstripConfig::default();
        let out = parse(&layout(&config, 1280.0, 720.0, 3, false, Some(true)).unwrap());
        assert_eq!(out["mode"], "vertical-filmstrip");
    }
}
