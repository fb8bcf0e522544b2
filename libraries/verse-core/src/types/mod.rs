//! Domain types for Verse Player

mod ids;
mod playlist;
mod track;

pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::{TrackMetadata, TrackRef};
