//! Video playability check.

use super::{ConnectionStatus, MediaSource, Participant};

/// Whether the participant's video can be shown.
///
/// Needs an unmuted track and audio-only mode off. Remote participants also
/// need an active connection; fake participants never play.
pub fn is_video_playable<M>(participant: &Participant, media: &M, audio_only: bool) -> bool
where
    M: MediaSource + ?Sized,
{
    let track_live = || {
        media
            .video_track(participant)
            .is_some_and(|track| !track.muted)
            && !audio_only
    };

    match participant {
        Participant::Local => track_live(),
        Participant::Remote { id } => {
            track_live() && media.connection_status(id) == ConnectionStatus::Active
        }
        Participant::Fake { .. } => false,
    }
}

/// Same decision over already-extracted flags.
pub fn is_video_playable_flags(
    is_local: bool,
    video_track_present: bool,
    video_track_muted: bool,
    audio_only: bool,
    remote_connection_active: bool,
    is_fake: bool,
) -> bool {
    let track_live = video_track_present && !video_track_muted && !audio_only;
    if is_local {
        track_live
    } else if !is_fake {
        track_live && remote_connection_active
    } else {
        false
    }
}
