//! Participant and media value types.

use filmstrip_common::ParticipantId;
use serde::{Deserialize, Serialize};

/// A conference participant as seen by the filmstrip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Participant {
    Local,
    Remote { id: ParticipantId },
    /// Placeholder with no media connection behind it (e.g. a shared video).
    Fake { id: ParticipantId },
}

impl Participant {
    pub fn remote(id: impl Into<String>) -> Self {
        Participant::Remote {
            id: ParticipantId::new(id),
        }
    }

    pub fn fake(id: impl Into<String>) -> Self {
        Participant::Fake {
            id: ParticipantId::new(id),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Participant::Local)
    }

    pub fn is_fake(&self) -> bool {
        matches!(self, Participant::Fake { .. })
    }

    pub fn id(&self) -> Option<&ParticipantId> {
        match self {
            Participant::Local => None,
            Participant::Remote { id } | Participant::Fake { id } => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    #[default]
    Camera,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoTrack {
    pub muted: bool,
    #[serde(default)]
    pub video_type: VideoType,
}

impl VideoTrack {
    pub fn camera() -> Self {
        Self {
            muted: false,
            video_type: VideoType::Camera,
        }
    }

    pub fn desktop() -> Self {
        Self {
            muted: false,
            video_type: VideoType::Desktop,
        }
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }

    pub fn is_screen_share(&self) -> bool {
        self.video_type == VideoType::Desktop
    }
}

/// Media connection state of a remote participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Active,
    Inactive,
    Interrupted,
    Restoring,
}
