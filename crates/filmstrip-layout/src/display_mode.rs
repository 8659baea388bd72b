//! What a single thumbnail renders.
//!
//! A memoryless decision table, recomputed from a fresh snapshot every time
//! the thumbnail's inputs change.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::participant::{is_video_playable, MediaSource, Participant};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Video,
    Avatar,
    BlacknessWithName,
    VideoWithName,
    AvatarWithName,
}

impl DisplayMode {
    /// Stable numeric code used by thumbnail renderers.
    pub fn code(&self) -> u8 {
        match self {
            DisplayMode::Video => 0,
            DisplayMode::Avatar => 1,
            DisplayMode::BlacknessWithName => 2,
            DisplayMode::VideoWithName => 3,
            DisplayMode::AvatarWithName => 4,
        }
    }

    pub fn has_name(&self) -> bool {
        matches!(
            self,
            DisplayMode::BlacknessWithName | DisplayMode::VideoWithName | DisplayMode::AvatarWithName
        )
    }

    pub fn shows_video(&self) -> bool {
        matches!(self, DisplayMode::Video | DisplayMode::VideoWithName)
    }
}

/// Flags the display-mode decision is made from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayModeInput {
    pub is_audio_only: bool,
    pub is_currently_on_large_video: bool,
    pub is_screen_sharing: bool,
    /// The remote video element has fired its first `canplay`.
    pub can_play_event_received: bool,
    pub is_hovered: bool,
    pub is_remote_participant: bool,
    pub tile_view_active: bool,
    pub is_video_playable: bool,
}

/// UI-side state of a thumbnail, everything not derived from media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailUiState {
    pub audio_only: bool,
    pub on_large_video: bool,
    pub can_play_event_received: bool,
    pub hovered: bool,
    pub tile_view_active: bool,
}

impl DisplayModeInput {
    /// Build the decision input for one participant's thumbnail.
    ///
    /// Screen sharing is read off the participant's video track type.
    pub fn for_participant<M>(participant: &Participant, media: &M, ui: ThumbnailUiState) -> Self
    where
        M: MediaSource + ?Sized,
    {
        let is_screen_sharing = media
            .video_track(participant)
            .is_some_and(|track| track.is_screen_share());

        Self {
            is_audio_only: ui.audio_only,
            is_currently_on_large_video: ui.on_large_video,
            is_screen_sharing,
            can_play_event_received: ui.can_play_event_received,
            is_hovered: ui.hovered,
            is_remote_participant: !participant.is_local(),
            tile_view_active: ui.tile_view_active,
            is_video_playable: is_video_playable(participant, media, ui.audio_only),
        }
    }
}

// =============================================================================
// DECISION
// =============================================================================

pub fn compute_display_mode(input: &DisplayModeInput) -> DisplayMode {
    let adjusted_playable = input.is_video_playable
        && (!input.is_remote_participant || input.can_play_event_received);
    let with_name_if_hovered = |plain, named| if input.is_hovered { named } else { plain };

    let mode = if !input.tile_view_active && input.is_screen_sharing && input.is_remote_participant
    {
        with_name_if_hovered(DisplayMode::Avatar, DisplayMode::AvatarWithName)
    } else if input.is_currently_on_large_video && !input.tile_view_active {
        // The large video already shows this stream.
        if adjusted_playable && !input.is_audio_only {
            DisplayMode::BlacknessWithName
        } else {
            DisplayMode::AvatarWithName
        }
    } else if adjusted_playable && !input.is_audio_only {
        with_name_if_hovered(DisplayMode::Video, DisplayMode::VideoWithName)
    } else {
        with_name_if_hovered(DisplayMode::Avatar, DisplayMode::AvatarWithName)
    };

    trace!(?input, ?mode, "computed thumbnail display mode");
    mode
}

// =============================================================================
// TESTS
// =============================================================================
