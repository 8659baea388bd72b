//! Subcommand handlers. Each returns the pretty JSON it wants printed.

mod config_file;
mod geometry;
mod thumbnails;

use std::path::Path;

use filmstrip_common::Result;
use filmstrip_config::FilmstripConfig;
use serde::Serialize;

use crate::cli::Command;

pub fn run(
    command: &Command,
    config: &FilmstripConfig,
    config_override: Option<&Path>,
) -> Result<String> {
    match command {
        Command::Config => Ok(filmstrip_config::config_to_json(config)),
        Command::InitConfig { path, force } => {
            config_file::init_config(path.as_deref().or(config_override), *force)
        }
        Command::Tile {
            width,
            height,
            participants,
            max_columns,
        } => geometry::tile(config, *width, *height, *participants, *max_columns),
        Command::Horizontal { height } => geometry::horizontal(config, *height),
        Command::Vertical { width } => geometry::vertical(config, *width),
        Command::Layout {
            width,
            height,
            participants,
            tile_view,
            vertical,
        } => geometry::layout(config, *width, *height, *participants, *tile_view, *vertical),
        Command::Visibility {
            participants,
            callee_info_visible,
            disable_1on1,
            unset_1on1,
            toolbox_visible,
            pinned_local,
        } => thumbnails::visibility(
            config,
            thumbnails::VisibilityFlags {
                participants: *participants,
                callee_info_visible: *callee_info_visible,
                disable_1on1: *disable_1on1,
                unset_1on1: *unset_1on1,
                toolbox_visible: *toolbox_visible,
                pinned_local: *pinned_local,
            },
        ),
        Command::DisplayMode(flags) => thumbnails::display_mode(flags),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
