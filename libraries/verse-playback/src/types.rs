//! Core types for the playback crate

use serde::{Deserialize, Serialize};

/// Navigation direction for `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Next track in playlist order
    Forward,

    /// Previous track in playlist order
    Backward,
}

/// Derived lifecycle state of a playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No session loaded; navigation is an error
    Idle,

    /// Tracks are set and a current id is valid, but the sink has no source yet
    Loaded,

    /// Sink is sourced and advancing
    Playing,

    /// Sink is sourced and paused
    Paused,
}

/// Discrete UI intent dispatched by the shortcut layer
///
/// The key-to-command mapping table is external configuration; the
/// controller only translates commands into engine calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Scrub forward by the configured skip amount
    ScrubForward,

    /// Scrub backward by the configured skip amount
    ScrubBackward,

    /// Toggle between playing and paused
    PlayPause,

    /// Advance to the next track
    NextTrack,

    /// Go back to the previous track
    PreviousTrack,

    /// Toggle the volume-based mute
    ToggleMute,
}

/// Configuration for the navigation controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Seconds added/removed by scrub commands (default: 5.0)
    pub skip_seconds: f64,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            skip_seconds: 5.0,
            shuffle: false,
        }
    }
}
