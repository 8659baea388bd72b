//! Horizontal/vertical strip configuration types.

use serde::{Deserialize, Serialize};

/// Strip sizing and 1-on-1 behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Height cap of the horizontal strip, also the width cap of the
    /// vertical strip (valid range: 1-2000).
    #[serde(alias = "filmStripMaxHeight")]
    pub max_height: u32,
    /// Combined top and bottom margin of the horizontal strip (valid range: 0-200).
    pub top_bottom_margin: u32,
    /// Width / height of the local thumbnail (valid range: 0.1-10.0).
    #[serde(alias = "localThumbnailRatio")]
    pub local_thumbnail_ratio: f64,
    /// Width / height of remote thumbnails (valid range: 0.1-10.0).
    #[serde(alias = "remoteThumbnailRatio")]
    pub remote_thumbnail_ratio: f64,
    /// Minimum horizontal margin of the vertical strip (valid range: 0-100).
    #[serde(alias = "verticalFilmstripMinHorizontalMargin")]
    pub vertical_min_horizontal_margin: u32,
    /// Horizontal border of a stage-view thumbnail (valid range: 0-100).
    #[serde(alias = "stageViewThumbnailHorizontalBorder")]
    pub stage_view_thumbnail_horizontal_border: u32,
    /// Lay the strip out vertically along the right edge.
    pub vertical: bool,
    /// Unset keeps the default 1-on-1 behavior; `true` always shows remote
    /// thumbnails; `false` lets the toolbox/pinning decide.
    #[serde(
        alias = "disable1On1Mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub disable_1on1_mode: Option<bool>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            max_height: 120,
            top_bottom_margin: 15,
            local_thumbnail_ratio: 16.0 / 9.0,
            remote_thumbnail_ratio: 1.0,
            vertical_min_horizontal_margin: 10,
            stage_view_thumbnail_horizontal_border: 4,
            vertical: false,
            disable_1on1_mode: None,
        }
    }
}
