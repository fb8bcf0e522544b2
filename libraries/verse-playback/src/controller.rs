//! Navigation controller - UI intents over the playback engine
//!
//! Translates discrete commands (next/previous/play-toggle/seek/scrub/mute/
//! shuffle) into engine calls and queues state-change events for the UI
//! binder. The binder drains events with `take_events` and owns all
//! presentation; nothing here touches display state.

use crate::{
    engine::PlaybackEngine,
    error::Result,
    events::{PlayerEvent, TransportState},
    format::format_time,
    sink::AudioSink,
    types::{Command, Direction, PlayerConfig},
};
use tracing::warn;
use verse_core::{TrackId, TrackRef};

/// Event-emitting wrapper around a `PlaybackEngine`
///
/// All operations are synchronous and serialized by the caller's event
/// loop; a notification handler is never re-entered.
pub struct NavigationController<S: AudioSink> {
    engine: PlaybackEngine<S>,
    config: PlayerConfig,
    pending_events: Vec<PlayerEvent>,
}

impl<S: AudioSink> NavigationController<S> {
    /// Wrap an engine with the given configuration
    pub fn new(mut engine: PlaybackEngine<S>, config: PlayerConfig) -> Self {
        engine.set_shuffle(config.shuffle);
        Self {
            engine,
            config,
            pending_events: Vec::new(),
        }
    }

    /// Load a new session and announce the first track
    pub fn load(&mut self, tracks: Vec<TrackRef>) -> Result<()> {
        self.engine.load(tracks)?;
        let track_id = self.engine.current_track()?.id;
        self.emit(PlayerEvent::CurrentTrackChanged { track_id });
        Ok(())
    }

    /// Advance to the next track
    pub fn next(&mut self) -> Result<()> {
        self.advance(Direction::Forward)
    }

    /// Go back to the previous track
    pub fn previous(&mut self) -> Result<()> {
        self.advance(Direction::Backward)
    }

    /// Single-button transport dispatch
    ///
    /// While the sink is playing, always a pure pause regardless of which
    /// id was passed; while paused, always (re)plays the given id. The
    /// asymmetry matches a one-button transport UI.
    pub fn play_or_pause(&mut self, id: TrackId) -> Result<()> {
        let result = if self.engine.sink().paused() {
            self.engine.play_at(id)
        } else {
            self.engine.toggle_pause()
        };
        self.finish_transport_command(result)?;
        let track_id = self.engine.current_track()?.id;
        self.emit(PlayerEvent::CurrentTrackChanged { track_id });
        Ok(())
    }

    /// Handle the sink's time-advance notification
    ///
    /// Emits a `Progress` event. While the duration is still unknown (NaN)
    /// the duration text is withheld and the percent reported as 0, but the
    /// position text is still updated; no NaN reaches the event.
    pub fn progress_update(&mut self) {
        let current = self.engine.sink().current_time();
        let duration = self.engine.sink().duration();

        let (percent, duration_text) = if duration.is_nan() || duration <= 0.0 {
            (0.0, None)
        } else {
            (100.0 * current / duration, Some(format_time(duration)))
        };

        self.emit(PlayerEvent::Progress {
            percent,
            current_time: format_time(current),
            duration: duration_text,
        });
    }

    /// Handle the sink's end-of-track notification
    ///
    /// Same path as `next`: auto-advance with wraparound (or a shuffle
    /// pick).
    pub fn on_ended(&mut self) -> Result<()> {
        self.next()
    }

    /// Handle the sink's error notification
    ///
    /// Playback state reverts to paused so the UI never shows a stale
    /// "playing" indicator.
    pub fn on_sink_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "sink error");
        self.emit(PlayerEvent::SinkError { message });
        self.emit(PlayerEvent::TransportStateChanged {
            state: TransportState::Paused,
        });
    }

    /// Seek to a percentage of the track duration
    pub fn seek(&mut self, percent: f64) -> Result<()> {
        self.engine.seek_to_fraction(percent)
    }

    /// Adjust the position by a signed number of seconds
    pub fn scrub(&mut self, delta_seconds: f64) {
        self.engine.scrub_by(delta_seconds);
    }

    /// Flip the volume-based mute, returning and announcing the new state
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.engine.toggle_mute();
        self.emit(PlayerEvent::MuteChanged { muted });
        muted
    }

    /// Flip shuffle, returning and announcing the new state
    pub fn toggle_shuffle(&mut self) -> bool {
        let enabled = self.engine.toggle_shuffle();
        self.emit(PlayerEvent::ShuffleChanged { enabled });
        enabled
    }

    /// Execute a shortcut command
    ///
    /// The key-to-command mapping lives with the caller; this is the whole
    /// of the dispatch surface.
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::ScrubForward => {
                self.scrub(self.config.skip_seconds);
                Ok(())
            }
            Command::ScrubBackward => {
                self.scrub(-self.config.skip_seconds);
                Ok(())
            }
            Command::PlayPause => {
                let id = self.engine.current_track()?.id;
                self.play_or_pause(id)
            }
            Command::NextTrack => self.next(),
            Command::PreviousTrack => self.previous(),
            Command::ToggleMute => {
                self.toggle_mute();
                Ok(())
            }
        }
    }

    /// Drain all pending events, oldest first
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Read access to the wrapped engine
    pub fn engine(&self) -> &PlaybackEngine<S> {
        &self.engine
    }

    /// Mutable access to the wrapped engine
    pub fn engine_mut(&mut self) -> &mut PlaybackEngine<S> {
        &mut self.engine
    }

    fn advance(&mut self, direction: Direction) -> Result<()> {
        let result = self.engine.advance(direction);
        self.finish_transport_command(result)?;
        let track_id = self.engine.current_track()?.id;
        self.emit(PlayerEvent::CurrentTrackChanged { track_id });
        Ok(())
    }

    /// Emit the transport state the command left the sink in
    ///
    /// A sink failure maps to a paused indicator before the error
    /// propagates. Validation errors rejected at the boundary emit
    /// nothing.
    fn finish_transport_command(&mut self, result: Result<()>) -> Result<()> {
        let state = match result {
            Ok(()) => {
                if self.engine.sink().paused() {
                    TransportState::Paused
                } else {
                    TransportState::Playing
                }
            }
            Err(crate::error::PlaybackError::SinkUnavailable(_)) => TransportState::Paused,
            Err(_) => return result,
        };
        self.emit(PlayerEvent::TransportStateChanged { state });
        result
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}
