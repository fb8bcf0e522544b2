/// Core traits for Verse Player
use crate::error::Result;
use crate::types::{PlaylistId, TrackId, TrackMetadata, TrackRef};

/// Song/playlist data provider
///
/// Abstracts the persistence layer (local storage, database, remote API).
/// The playback core consumes this once at session load time; it never
/// touches persistence directly.
pub trait TrackProvider {
    /// Get the ordered track references of a playlist
    ///
    /// # Errors
    /// Returns `PlaylistNotFound` if no playlist has the given id
    fn playlist_tracks(&self, playlist_id: &PlaylistId) -> Result<Vec<TrackRef>>;

    /// Get display metadata for a single track
    ///
    /// # Errors
    /// Returns `TrackNotFound` if no track has the given id
    fn track_metadata(&self, id: TrackId) -> Result<TrackMetadata>;

    /// Persist the liked flag for a track
    ///
    /// Callers compute the new flag with `TrackMetadata::toggle_liked` and
    /// hand the result here; the provider owns the storage format.
    ///
    /// # Errors
    /// Returns `TrackNotFound` if no track has the given id
    fn set_liked(&mut self, id: TrackId, liked: bool) -> Result<()>;
}
