//! Tile grid arrangement: how many columns and rows for a participant count.

use super::TileGrid;

/// Arrange `participant_count` tiles as close to a square as `max_columns`
/// allows.
///
/// Both inputs are raised to at least 1 so the grid is never empty.
pub fn tile_grid_dimensions(participant_count: u32, max_columns: u32) -> TileGrid {
    let count = participant_count.max(1);
    let max_columns = max_columns.max(1);

    let columns_to_maintain_square = f64::from(count).sqrt().ceil() as u32;
    let columns = columns_to_maintain_square.min(max_columns);
    let rows = count.div_ceil(columns);

    TileGrid {
        columns,
        min_visible_rows: max_columns.min(rows),
        rows,
    }
}
