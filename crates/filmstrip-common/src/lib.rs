pub mod errors;
pub mod types;

pub use errors::{ConfigError, FilmstripError};
pub use types::{ParticipantId, StripSizes, ThumbnailSize};

pub type Result<T> = std::result::Result<T, FilmstripError>;
