//! Tile view sizing.
//!
//! A tile is as large as possible while keeping its aspect ratio and letting
//! `min_visible_rows` rows fit on screen. When the whole grid would not fit
//! and the scrollbar would eat into the last column, the size is corrected
//! once for the scrollbar width, but never below the height at which every
//! row fits without scrolling.

use filmstrip_common::ThumbnailSize;
use tracing::debug;

use super::{FilmstripGeometry, TileLayoutInput};

impl FilmstripGeometry {
    /// Aspect ratio used for tiles at the given client width.
    pub fn tile_aspect_ratio_for(&self, client_width: f64, disable_responsive_tiles: bool) -> f64 {
        if disable_responsive_tiles || client_width >= self.aspect_ratio_breakpoint {
            self.tile_aspect_ratio
        } else {
            self.square_tile_aspect_ratio
        }
    }

    /// Largest tile for the given grid and viewport.
    ///
    /// Zero column or row counts are treated as 1.
    pub fn size_for_tile(&self, input: &TileLayoutInput) -> ThumbnailSize {
        let aspect_ratio =
            self.tile_aspect_ratio_for(input.client_width, input.disable_responsive_tiles);
        let columns = f64::from(input.columns.max(1));
        let min_visible_rows = f64::from(input.min_visible_rows.max(1));
        let rows = f64::from(input.rows.max(1));

        let view_width = input.client_width - columns * self.tile_horizontal_margin;
        let view_height = input.client_height - min_visible_rows * self.tile_vertical_margin;
        let initial_width = view_width / columns;
        let initial_height = view_height / min_visible_rows;
        let aspect_ratio_height = initial_width / aspect_ratio;
        let no_scroll_height = input.client_height / rows - self.tile_vertical_margin;
        let scroll_initial_width = (view_width - self.scroll_size) / columns;

        let mut height = aspect_ratio_height.min(initial_height).floor();
        let mut width = (aspect_ratio * height).floor();

        if height > no_scroll_height && width > scroll_initial_width {
            let scroll_aspect_ratio_height = scroll_initial_width / aspect_ratio;
            height = scroll_aspect_ratio_height
                .min(initial_height)
                .max(no_scroll_height)
                .floor();
            width = (aspect_ratio * height).floor();
            debug!(
                columns = input.columns,
                rows = input.rows,
                width,
                height,
                "tile size corrected for scrollbar"
            );
        }

        ThumbnailSize {
            width: width as i64,
            height: height as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_133() -> FilmstripGeometry {
        FilmstripGeometry {
            tile_aspect_ratio: 1.33,
            ..Default::default()
        }
    }

    fn input(columns: u32, min_visible_rows: u32, rows: u32, w: f64, h: f64) -> TileLayoutInput {
        TileLayoutInput {
            columns,
            min_visible_rows,
            rows,
            client_width: w,
            client_height: h,
            disable_responsive_tiles: true,
        }
    }

    #[test]
    fn worked_example_three_by_two() {
        // view 888x592, initial 296x296, aspect height 222.56
        // no-scroll height 296, so no correction
        let size = geometry_133().size_for_tile(&input(3, 2, 2, 900.0, 600.0));
        assert_eq!(size, ThumbnailSize::new(295, 222));
    }

    #[test]
    fn scroll_correction_when_both_conditions_hold() {
        // rows = 4: no-scroll height 146 < 222 and width 295 > 293.67
        // corrected height = floor(max(min(293.67 / 1.33, 296), 146)) = 220
        let size = geometry_133().size_for_tile(&input(3, 2, 4, 900.0, 600.0));
        assert_eq!(size, ThumbnailSize::new(292, 220));
    }

    #[test]
    fn no_correction_when_only_height_overflows() {
        // height 196 > no-scroll 96, but width 260 <= 293.67
        let size = geometry_133().size_for_tile(&input(3, 2, 4, 900.0, 400.0));
        assert_eq!(size, ThumbnailSize::new(260, 196));
    }

    #[test]
    fn no_correction_when_only_width_overflows() {
        // width 295 > 293.67, but height 222 <= no-scroll 296
        let geometry = geometry_133();
        let size = geometry.size_for_tile(&input(3, 2, 2, 900.0, 600.0));
        assert!(size.width as f64 > (888.0 - geometry.scroll_size) / 3.0);
        assert_eq!(size.height, 222);
    }

    #[test]
    fn correction_never_drops_below_no_scroll_height() {
        // A large scrollbar would push the height under the no-scroll optimum.
        let geometry = FilmstripGeometry {
            tile_aspect_ratio: 1.0,
            scroll_size: 400.0,
            ..Default::default()
        };
        // view 888x592; initial 296x296; no-scroll 600/3 - 4 = 196
        // scroll width (888 - 400)/3 = 162.67, raised back to 196
        let size = geometry.size_for_tile(&input(3, 2, 3, 900.0, 600.0));
        assert_eq!(size, ThumbnailSize::new(196, 196));
    }

    #[test]
    fn responsive_tiles_go_square_below_breakpoint() {
        let geometry = FilmstripGeometry::default();
        let size = geometry.size_for_tile(&TileLayoutInput {
            columns: 2,
            min_visible_rows: 2,
            rows: 2,
            client_width: 400.0,
            client_height: 400.0,
            disable_responsive_tiles: false,
        });
        assert_eq!(size, ThumbnailSize::new(196, 196));
    }

    #[test]
    fn disabled_responsive_tiles_keep_default_aspect() {
        let geometry = FilmstripGeometry::default();
        assert!((geometry.tile_aspect_ratio_for(400.0, true) - 16.0 / 9.0).abs() < f64::EPSILON);
        assert!((geometry.tile_aspect_ratio_for(400.0, false) - 1.0).abs() < f64::EPSILON);
        assert!((geometry.tile_aspect_ratio_for(500.0, false) - 16.0 / 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn size_for_tile_is_idempotent() {
        let geometry = FilmstripGeometry::default();
        let request = TileLayoutInput {
            columns: 4,
            min_visible_rows: 3,
            rows: 5,
            client_width: 1366.0,
            client_height: 768.0,
            disable_responsive_tiles: false,
        };
        assert_eq!(geometry.size_for_tile(&request), geometry.size_for_tile(&request));
    }

    #[test]
    fn output_keeps_aspect_ratio_within_rounding() {
        let geometry = FilmstripGeometry::default();
        let cases = [
            (1, 1, 1, 1920.0, 1080.0),
            (2, 1, 1, 1280.0, 720.0),
            (3, 2, 2, 1366.0, 768.0),
            (4, 3, 4, 1440.0, 900.0),
            (5, 5, 7, 2560.0, 1440.0),
        ];
        for (columns, min_rows, rows, w, h) in cases {
            let request = TileLayoutInput {
                columns,
                min_visible_rows: min_rows,
                rows,
                client_width: w,
                client_height: h,
                disable_responsive_tiles: false,
            };
            let size = geometry.size_for_tile(&request);
            let aspect = geometry.tile_aspect_ratio_for(w, false);
            let expected_width = aspect * size.height as f64;
            assert!(
                (size.width as f64 - expected_width).abs() <= 1.0,
                "{columns}x{rows} in {w}x{h}: {size}"
            );
        }
    }

    #[test]
    fn zero_counts_size_like_a_single_tile() {
        let geometry = FilmstripGeometry::default();
        let zero = geometry.size_for_tile(&input(0, 0, 0, 1280.0, 720.0));
        let one = geometry.size_for_tile(&input(1, 1, 1, 1280.0, 720.0));
        assert_eq!(zero, one);
        assert!(zero.width < 1280 && zero.height < 720);
    }

    #[test]
    fn degenerate_viewport_does_not_panic() {
        let geometry = FilmstripGeometry::default();
        let size = geometry.size_for_tile(&input(3, 2, 2, 0.0, 0.0));
        assert!(!size.is_renderable());
    }
}
