use serde::{Deserialize, Serialize};
use std::fmt;

/// Which arrangement the conference view is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    HorizontalFilmstrip,
    VerticalFilmstrip,
    TileView,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutMode::HorizontalFilmstrip => "horizontal-filmstrip",
            LayoutMode::VerticalFilmstrip => "vertical-filmstrip",
            LayoutMode::TileView => "tile-view",
        };
        f.write_str(name)
    }
}

/// Tile view wins over the strip orientation.
pub fn current_layout(tile_view_enabled: bool, vertical_filmstrip: bool) -> LayoutMode {
    if tile_view_enabled {
        LayoutMode::TileView
    } else if vertical_filmstrip {
        LayoutMode::VerticalFilmstrip
    } else {
        LayoutMode::HorizontalFilmstrip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_view_takes_precedence() {
        assert_eq!(current_layout(true, true), LayoutMode::TileView);
        assert_eq!(current_layout(true, false), LayoutMode::TileView);
    }

    #[test]
    fn strip_orientation_from_flag() {
        assert_eq!(current_layout(false, true), LayoutMode::VerticalFilmstrip);
        assert_eq!(current_layout(false, false), LayoutMode::HorizontalFilmstrip);
    }

    #[test]
    fn display_matches_serde_name() {
        for mode in [
            LayoutMode::HorizontalFilmstrip,
            LayoutMode::VerticalFilmstrip,
            LayoutMode::TileView,
        ] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
    }
}
