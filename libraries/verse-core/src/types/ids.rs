/// ID types for Verse Player entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Numeric, unique within a playlist. Non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(u32);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric value
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrackId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Playlist identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Create a new playlist ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_display_and_raw() {
        let id = TrackId::new(3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(id.raw(), 3);
        assert_eq!(TrackId::from(3), id);
    }

    #[test]
    fn ids_serialize_transparently() {
        let track = TrackId::new(5);
        assert_eq!(serde_json::to_string(&track).unwrap(), "5");

        let playlist = PlaylistId::new("favorites");
        assert_eq!(serde_json::to_string(&playlist).unwrap(), "\"favorites\"");
    }
}
