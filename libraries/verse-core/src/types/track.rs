//! Track types

use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Playlist-scoped reference to a playable item
///
/// Immutable once loaded into a playback session. The locator is whatever
/// string the platform audio sink accepts as a source (a path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Track identifier, unique within the playlist
    pub id: TrackId,

    /// Source locator for the audio sink
    pub locator: String,
}

impl TrackRef {
    /// Create a new track reference
    pub fn new(id: TrackId, locator: impl Into<String>) -> Self {
        Self {
            id,
            locator: locator.into(),
        }
    }
}

/// Display metadata for a track, as returned by the data provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Genre label
    pub genre: String,

    /// Source locator for the audio sink
    pub locator: String,

    /// Whether the user has liked this track
    pub liked: bool,
}

impl TrackMetadata {
    /// Return a copy with the liked flag flipped
    ///
    /// Liking is a pure state transition: the caller hands the result back
    /// to the data provider for persistence. No shared object is mutated
    /// in place.
    pub fn toggle_liked(mut self) -> Self {
        self.liked = !self.liked;
        self
    }
}
