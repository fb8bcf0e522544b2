//! Error types for the playback core

use thiserror::Error;
use verse_core::TrackId;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No session has been loaded yet
    #[error("No session loaded")]
    NoSessionLoaded,

    /// No track with the given id exists in the session
    #[error("Track not found in session: {0}")]
    TrackNotFound(TrackId),

    /// A session cannot be loaded from an empty track list
    #[error("Cannot load an empty track list")]
    EmptyTrackList,

    /// Track ids must be unique within a session
    #[error("Duplicate track id in session: {0}")]
    DuplicateTrackId(TrackId),

    /// Seek percent outside the 0-100 range
    #[error("Seek percent out of range: {0}")]
    InvalidSeekPercent(f64),

    /// Platform audio sink failure
    #[error("Audio sink unavailable: {0}")]
    SinkUnavailable(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
