//! Playback session
//!
//! The ordered set of tracks loaded from a playlist plus the current-position
//! id. Sessions are created whole and replaced whole; tracks are never added
//! or removed at runtime.

use crate::error::{PlaybackError, Result};
use std::collections::HashSet;
use verse_core::{TrackId, TrackRef};

/// An immutable ordered track list with a movable current id
///
/// `current_id` is keyed by track id, not array index, and is always a
/// member of the session's id set.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    tracks: Vec<TrackRef>,
    current_id: TrackId,
}

impl PlaybackSession {
    /// Build a session from an ordered track list
    ///
    /// The current id starts at the first track. Validation happens before
    /// any state exists, so a failed construction leaves nothing behind.
    ///
    /// # Errors
    /// `EmptyTrackList` for an empty sequence, `DuplicateTrackId` if two
    /// tracks share an id.
    pub fn new(tracks: Vec<TrackRef>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyTrackList);
        }

        let mut seen = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.id) {
                return Err(PlaybackError::DuplicateTrackId(track.id));
            }
        }

        let current_id = tracks[0].id;
        Ok(Self { tracks, current_id })
    }

    /// Number of tracks in the session
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false: construction rejects empty track lists
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Id of the current track
    pub fn current_id(&self) -> TrackId {
        self.current_id
    }

    /// Move the current id to another member of the session
    ///
    /// # Errors
    /// `TrackNotFound` if the id is not in the session; the current id is
    /// unchanged in that case.
    pub fn set_current(&mut self, id: TrackId) -> Result<()> {
        self.track(id)?;
        self.current_id = id;
        Ok(())
    }

    /// Look up a track by id
    pub fn track(&self, id: TrackId) -> Result<&TrackRef> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or(PlaybackError::TrackNotFound(id))
    }

    /// Source locator for a track id
    pub fn locator(&self, id: TrackId) -> Result<&str> {
        self.track(id).map(|t| t.locator.as_str())
    }

    /// Position of a track id in playlist order
    pub fn position_of(&self, id: TrackId) -> Result<usize> {
        self.tracks
            .iter()
            .position(|t| t.id == id)
            .ok_or(PlaybackError::TrackNotFound(id))
    }

    /// Track at a playlist-order position
    ///
    /// # Panics
    /// Panics if `position >= len()`; callers derive positions from
    /// `position_of` and modulo arithmetic over `len()`.
    pub fn track_at(&self, position: usize) -> &TrackRef {
        &self.tracks[position]
    }

    /// All tracks in playlist order
    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }
}
