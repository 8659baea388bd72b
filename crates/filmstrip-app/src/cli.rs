use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Filmstrip: thumbnail layout engine for conference views.
#[derive(Parser, Debug)]
#[command(name = "filmstrip", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration.
    Config,

    /// Write the commented default config file.
    InitConfig {
        /// Destination; defaults to `--config` or the platform config path.
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Size tiles for the tile view grid.
    Tile {
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        height: f64,

        #[arg(long)]
        participants: u32,

        /// Defaults to `tile_view.max_columns`.
        #[arg(long)]
        max_columns: Option<u32>,
    },

    /// Size thumbnails for the horizontal strip.
    Horizontal {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        height: f64,
    },

    /// Size thumbnails for the vertical strip.
    Vertical {
        #[arg(long, allow_negative_numbers = true)]
        width: f64,
    },

    /// Decide whether remote thumbnails are shown.
    Visibility {
        #[arg(long)]
        participants: u32,

        #[arg(long)]
        callee_info_visible: bool,

        /// Defaults to `filmstrip.disable_1on1_mode`.
        #[arg(long = "disable-1on1")]
        disable_1on1: Option<bool>,

        /// Treat the 1-on-1 setting as unset, ignoring the config.
        #[arg(long = "unset-1on1", conflicts_with = "disable_1on1")]
        unset_1on1: bool,

        #[arg(long)]
        toolbox_visible: bool,

        #[arg(long)]
        pinned_local: bool,
    },

    /// Pick what a thumbnail renders.
    DisplayMode(DisplayModeArgs),

    /// Run a full layout pass for the current mode.
    Layout {
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        height: f64,

        #[arg(long)]
        participants: u32,

        #[arg(long)]
        tile_view: bool,

        /// `--vertical` alone means true; defaults to `filmstrip.vertical`.
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        vertical: Option<bool>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct DisplayModeArgs {
    #[arg(long)]
    pub audio_only: bool,

    #[arg(long)]
    pub on_large_video: bool,

    #[arg(long)]
    pub screen_sharing: bool,

    /// The remote video has fired `canplay`.
    #[arg(long)]
    pub can_play: bool,

    #[arg(long)]
    pub hovered: bool,

    #[arg(long)]
    pub remote: bool,

    #[arg(long)]
    pub tile_view: bool,

    #[arg(long)]
    pub playable: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
