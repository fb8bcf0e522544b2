//! Verse Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Verse Player.
//!
//! This crate defines:
//! - **Domain Types**: `TrackRef`, `TrackMetadata`, `Playlist` and their ids
//! - **Core Traits**: `TrackProvider` (the song/playlist data provider)
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{Playlist, PlaylistId, TrackId, TrackRef};
//!
//! let playlist = Playlist::new(PlaylistId::new("road-trip"), "Road Trip")
//!     .with_tracks(vec![
//!         TrackRef::new(TrackId::new(0), "media/01_song.mp3"),
//!         TrackRef::new(TrackId::new(1), "media/02_song.mp3"),
//!     ]);
//!
//! assert_eq!(playlist.tracks.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::TrackProvider;
pub use types::{Playlist, PlaylistId, TrackId, TrackMetadata, TrackRef};
