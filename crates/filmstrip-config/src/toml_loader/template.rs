//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# Filmstrip Layout Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Interface-style names (tileAspectRatio, filmStripMaxHeight, ...) are accepted too.

[tile_view]
# aspect_ratio = 1.7777777777777777   # 0.1-10.0, wide-screen tiles (16:9)
# square_aspect_ratio = 1.0           # 0.1-10.0, below the breakpoint
# aspect_ratio_breakpoint = 500       # 0-10000 px
# horizontal_margin = 4               # 0-100 px
# vertical_margin = 4                 # 0-100 px
# scroll_size = 7                     # 0-50 px
# max_columns = 5                     # 1-10
# disable_responsive_tiles = false

[filmstrip]
# max_height = 120                    # 1-2000 px, also caps the vertical strip width
# top_bottom_margin = 15              # 0-200 px
# local_thumbnail_ratio = 1.7777777777777777  # 0.1-10.0
# remote_thumbnail_ratio = 1.0        # 0.1-10.0
# vertical_min_horizontal_margin = 10 # 0-100 px
# stage_view_thumbnail_horizontal_border = 4  # 0-100 px
# vertical = false
# disable_1on1_mode = false           # unset by default

[logging]
# level = "INFO"                      # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
