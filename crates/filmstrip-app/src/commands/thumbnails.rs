//! Per-thumbnail decisions: strip visibility and display mode.

use filmstrip_common::Result;
use filmstrip_config::FilmstripConfig;
use filmstrip_layout::{
    compute_display_mode, should_show_remote_thumbnails, DisplayMode, DisplayModeInput,
    VisibilityContext,
};
use serde::Serialize;

use crate::cli::DisplayModeArgs;

pub struct VisibilityFlags {
    pub participants: u32,
    pub callee_info_visible: bool,
    pub disable_1on1: Option<bool>,
    pub unset_1on1: bool,
    pub toolbox_visible: bool,
    pub pinned_local: bool,
}

#[derive(Serialize)]
struct VisibilityReport {
    show_remote_thumbnails: bool,
    context: VisibilityContext,
}

#[derive(Serialize)]
struct DisplayModeReport {
    mode: DisplayMode,
    code: u8,
    has_name: bool,
    shows_video: bool,
}

pub fn visibility(config: &FilmstripConfig, flags: VisibilityFlags) -> Result<String> {
    let disable_1on1_mode = if flags.unset_1on1 {
        None
    } else {
        flags.disable_1on1.or(config.filmstrip.disable_1on1_mode)
    };
    let context = VisibilityContext {
        participant_count: flags.participants,
        callee_info_visible: flags.callee_info_visible,
        disable_1on1_mode,
        toolbox_visible: flags.toolbox_visible,
        pinned_participant_is_local: flags.pinned_local,
    };

    super::to_json(&VisibilityReport {
        show_remote_thumbnails: should_show_remote_thumbnails(&context),
        context,
    })
}

pub fn display_mode(flags: &DisplayModeArgs) -> Result<String> {
    let input = DisplayModeInput {
        is_audio_only: flags.audio_only,
        is_currently_on_large_video: flags.on_large_video,
        is_screen_sharing: flags.screen_sharing,
        can_play_event_received: flags.can_play,
        is_hovered: flags.hovered,
        is_remote_participant: flags.remote,
        tile_view_active: flags.tile_view,
        is_video_playable: flags.playable,
    };
    let mode = compute_display_mode(&input);

    super::to_json(&DisplayModeReport {
        mode,
        code: mode.code(),
        has_name: mode.has_name(),
        shows_video: mode.shows_video(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn flags(participants: u32) -> VisibilityFlags {
        VisibilityFlags {
            participants,
            callee_info_visible: false,
            disable_1on1: None,
            unset_1on1: false,
            toolbox_visible: false,
            pinned_local: false,
        }
    }

    #[test]
    fn visibility_uses_config_1on1_setting() {
        let mut config = FilmstripConfig::default();
        config.filmstrip.disable_1on1_mode = Some(true);

        let out: Value = serde_json::from_str(&visibility(&config, flags(1)).unwrap()).unwrap();
        assert_eq!(out["show_remote_thumbnails"], true);
        assert_eq!(out["context"]["disable_1on1_mode"], true);
    }

    #[test]
    fn visibility_flag_overrides_config() {
        let mut config = FilmstripConfig::default();
        config.filmstrip.disable_1on1_mode = Some(true);

        let out: Value = serde_json::from_str(
            &visibility(
                &config,
                VisibilityFlags {
                    disable_1on1: Some(false),
                    ..flags(2)
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(out["show_remote_thumbnails"], false);
    }

    #[test]
    fn unset_flag_clears_configured_1on1_setting() {
        let mut config = FilmstripConfig::default();
        config.filmstrip.disable_1on1_mode = Some(true);

        let out: Value = serde_json::from_str(
            &visibility(
                &config,
                VisibilityFlags {
                    unset_1on1: true,
                    toolbox_visible: true,
                    ..flags(2)
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(out["show_remote_thumbnails"], false);
        assert!(out["context"]["disable_1on1_mode"].is_null());
    }

    #[test]
    fn display_mode_reports_code() {
        let args = DisplayModeArgs {
            remote: true,
            can_play: true,
            playable: true,
            hovered: true,
            ..Default::default()
        };
        let out: Value = serde_json::from_str(&display_mode(&args).unwrap()).unwrap();
        assert_eq!(out["mode"], "video_with_name");
        assert_eq!(out["code"], 3);
        assert_eq!(out["has_name"], true);
        assert_eq!(out["shows_video"], true);
    }

    #[test]
    fn remote_screen_share_reports_avatar() {
        let args = DisplayModeArgs {
            remote: true,
            screen_sharing: true,
            playable: true,
            can_play: true,
            ..Default::default()
        };
        let out: Value = serde_json::from_str(&display_mode(&args).unwrap()).unwrap();
        assert_eq!(out["mode"], "avatar");
        assert_eq!(out["code"], 1);
    }
}
