use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel size of a single thumbnail.
///
/// Very small viewports produce zero or negative sizes and the geometry
/// functions report them as-is. Use [`ThumbnailSize::clamped`]
/// before handing a size to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ThumbnailSize {
    pub width: i64,
    pub height: i64,
}

impl ThumbnailSize {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are strictly positive.
    pub fn is_renderable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Local and remote thumbnail sizes for the horizontal and vertical strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StripSizes {
    pub local: ThumbnailSize,
    pub remote: ThumbnailSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
