//! Playback events
//!
//! Event-based communication with the UI binder. The controller pushes
//! events into a pending queue; the binder drains them with
//! [`NavigationController::take_events`](crate::NavigationController::take_events)
//! and is solely responsible for presentation updates.

use serde::{Deserialize, Serialize};
use verse_core::TrackId;

/// Events emitted by the navigation controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The current track changed (load, next/previous, end-of-track advance)
    CurrentTrackChanged {
        /// Id of the track that is now current
        track_id: TrackId,
    },

    /// Playing/paused changed, derived from sink state after a command
    TransportStateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// Periodic progress update from the sink's time-advance notification
    Progress {
        /// Position as a percentage of duration (0 when duration is unknown)
        percent: f64,
        /// Position rendered as `M:SS`
        current_time: String,
        /// Duration rendered as `M:SS`, `None` while metadata is unknown
        duration: Option<String>,
    },

    /// Shuffle mode flipped
    ShuffleChanged {
        /// New shuffle state
        enabled: bool,
    },

    /// Volume-based mute flipped
    MuteChanged {
        /// New logical muted state
        muted: bool,
    },

    /// The platform sink reported a playback failure
    SinkError {
        /// Platform error message
        message: String,
    },
}

/// Transport state for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// Audio is advancing
    Playing,
    /// Audio is paused
    Paused,
}
