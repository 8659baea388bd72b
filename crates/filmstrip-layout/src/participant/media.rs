//! Track and connection-status lookup.

use std::collections::HashMap;

use filmstrip_common::ParticipantId;

use super::{ConnectionStatus, Participant, VideoTrack};

/// Lookup the caller provides for track and connection state.
///
/// The engine never walks an application store; whatever holds the media
/// state implements this trait.
pub trait MediaSource {
    /// The participant's video track, if one is published.
    fn video_track(&self, participant: &Participant) -> Option<VideoTrack>;

    /// Connection status of a remote participant.
    fn connection_status(&self, id: &ParticipantId) -> ConnectionStatus;
}

/// A fixed snapshot of media state, keyed by participant.
///
/// Remote participants without an entry have no video track and an
/// `Inactive` connection.
#[derive(Debug, Clone, Default)]
pub struct StaticMedia {
    local_track: Option<VideoTrack>,
    remote: HashMap<ParticipantId, RemoteMedia>,
}

#[derive(Debug, Clone, Copy)]
struct RemoteMedia {
    track: Option<VideoTrack>,
    status: ConnectionStatus,
}

impl StaticMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_track(mut self, track: VideoTrack) -> Self {
        self.local_track = Some(track);
        self
    }

    pub fn with_remote(
        mut self,
        id: ParticipantId,
        track: Option<VideoTrack>,
        status: ConnectionStatus,
    ) -> Self {
        self.remote.insert(id, RemoteMedia { track, status });
        self
    }
}

impl MediaSource for StaticMedia {
    fn video_track(&self, participant: &Participant) -> Option<VideoTrack> {
        match participant {
            Participant::Local => self.local_track,
            Participant::Remote { id } | Participant::Fake { id } => {
                self.remote.get(id).and_then(|m| m.track)
            }
        }
    }

    fn connection_status(&self, id: &ParticipantId) -> ConnectionStatus {
        self.remote
            .get(id)
            .map(|m| m.status)
            .unwrap_or(ConnectionStatus::Inactive)
    }
}
