//! Filmstrip layout engine.
//!
//! Pure functions that size conference thumbnails for the horizontal strip,
//! the vertical strip and the tile grid, decide whether remote thumbnails are
//! shown at all, and pick what each thumbnail renders. Nothing here holds
//! state or performs I/O; every call is a function of its arguments.

pub mod display_mode;
pub mod geometry;
pub mod layout_mode;
pub mod participant;
pub mod visibility;

pub use display_mode::{compute_display_mode, DisplayMode, DisplayModeInput, ThumbnailUiState};
pub use geometry::{FilmstripGeometry, LayoutOutcome, LayoutRequest, TileGrid, TileLayoutInput};
pub use layout_mode::{current_layout, LayoutMode};
pub use participant::{
    is_video_playable, ConnectionStatus, MediaSource, Participant, StaticMedia, VideoTrack,
    VideoType,
};
pub use visibility::{should_show_remote_thumbnails, VisibilityContext};
