//! Participants, their media, and whether their video can play.

mod media;
mod playability;
mod types;

pub use media::*;
pub use playability::*;
pub use types::*;
