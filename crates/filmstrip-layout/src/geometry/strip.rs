//! Horizontal and vertical strip sizing.

use filmstrip_common::{StripSizes, ThumbnailSize};

use super::FilmstripGeometry;

impl FilmstripGeometry {
    /// Thumbnail sizes for the horizontal strip along the bottom edge.
    ///
    /// The result is not clamped: a `client_height` below
    /// `top_bottom_margin` gives a negative height.
    pub fn size_for_horizontal(&self, client_height: f64) -> StripSizes {
        let available_height =
            client_height.min(self.max_strip_height + self.top_bottom_margin);
        let height = available_height - self.top_bottom_margin;

        StripSizes {
            local: ThumbnailSize {
                width: (self.local_thumbnail_ratio * height).floor() as i64,
                height: height.floor() as i64,
            },
            remote: ThumbnailSize {
                width: (self.remote_thumbnail_ratio * height).floor() as i64,
                height: height.floor() as i64,
            },
        }
    }

    /// Thumbnail sizes for the vertical strip along the right edge.
    ///
    /// The strip width is capped by `max_strip_height`; both thumbnails take
    /// the full strip width and derive their height from their ratio.
    pub fn size_for_vertical(&self, client_width: f64) -> StripSizes {
        let available_width = (client_width - self.vertical_horizontal_margin())
            .max(0.0)
            .min(self.max_strip_height);

        StripSizes {
            local: ThumbnailSize {
                width: available_width.floor() as i64,
                height: (available_width / self.local_thumbnail_ratio).floor() as i64,
            },
            remote: ThumbnailSize {
                width: available_width.floor() as i64,
                height: (available_width / self.remote_thumbnail_ratio).floor() as i64,
            },
        }
    }

    fn vertical_horizontal_margin(&self) -> f64 {
        self.vertical_min_horizontal_margin
            + self.scroll_size
            + self.tile_horizontal_margin
            + self.stage_view_thumbnail_horizontal_border
    }
}
