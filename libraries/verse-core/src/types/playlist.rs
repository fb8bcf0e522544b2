//! Playlist type

use crate::types::{PlaylistId, TrackRef};
use serde::{Deserialize, Serialize};

/// An ordered collection of track references
///
/// Insertion order is the playlist order the playback session will use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Cover image locator (data URL or path), if any
    pub thumbnail: Option<String>,

    /// Tracks in playlist order
    pub tracks: Vec<TrackRef>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            thumbnail: None,
            tracks: Vec::new(),
        }
    }

    /// Replace the playlist's tracks
    pub fn with_tracks(mut self, tracks: Vec<TrackRef>) -> Self {
        self.tracks = tracks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrackId;

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::new(PlaylistId::new("p1"), "Morning").with_tracks(vec![
            TrackRef::new(TrackId::new(0), "media/01_song.mp3"),
            TrackRef::new(TrackId::new(1), "media/02_song.mp3"),
        ]);

        assert_eq!(playlist.name, "Morning");
        assert_eq!(playlist.tracks.len(), 2);
        assert!(playlist.thumbnail.is_none());
    }
}
