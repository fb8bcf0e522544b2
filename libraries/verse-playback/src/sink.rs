//! Platform-agnostic audio sink trait
//!
//! Abstracts the platform media element (HTML audio, native player, ...) so
//! the engine can be tested against a fake and never depends on a global
//! audio singleton.

use crate::error::Result;

/// Platform audio output
///
/// Owned exclusively by `PlaybackEngine`; no other component mutates sink
/// state. The sink's own decoding/playback is opaque and asynchronous:
/// progress is reported back by the platform invoking
/// [`NavigationController::progress_update`](crate::NavigationController::progress_update)
/// on time-advance, [`on_ended`](crate::NavigationController::on_ended) at
/// end of track, and
/// [`on_sink_error`](crate::NavigationController::on_sink_error) on
/// playback failure.
///
/// All times are in seconds. `duration` is NaN until the sink has loaded
/// enough metadata to know it.
pub trait AudioSink: Send {
    /// Load a new source locator, resetting the decoder
    ///
    /// # Errors
    /// Returns `SinkUnavailable` if the platform cannot accept the source
    fn load(&mut self, locator: &str) -> Result<()>;

    /// Start or resume playback of the loaded source
    ///
    /// # Errors
    /// Returns `SinkUnavailable` on platform audio failure
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping position and source
    fn pause(&mut self);

    /// Whether the sink is currently paused (true before any load)
    fn paused(&self) -> bool;

    /// The currently loaded locator, or `None` before the first load
    fn source(&self) -> Option<&str>;

    /// Current output volume in `0.0..=1.0`
    fn volume(&self) -> f32;

    /// Set the output volume
    fn set_volume(&mut self, volume: f32);

    /// The sink's native mute flag (independent of volume)
    fn muted(&self) -> bool;

    /// Set the native mute flag
    fn set_muted(&mut self, muted: bool);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Set the playback position
    ///
    /// The sink clamps out-of-range values; callers may pass negative or
    /// past-the-end positions.
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration in seconds, NaN until metadata is known
    fn duration(&self) -> f64;
}

/// Fake sink for unit tests
///
/// Records every mutation without producing audio. `set_current_time`
/// stores the raw value so tests can observe that the engine never clamps.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct FakeSink {
    pub source: Option<String>,
    pub paused: bool,
    pub volume: f32,
    pub muted: bool,
    pub current_time: f64,
    pub duration: f64,
    pub fail_play: bool,
}

#[cfg(test)]
impl FakeSink {
    pub fn new() -> Self {
        Self {
            source: None,
            paused: true,
            volume: 1.0,
            muted: false,
            current_time: 0.0,
            duration: f64::NAN,
            fail_play: false,
        }
    }
}

#[cfg(test)]
impl AudioSink for FakeSink {
    fn load(&mut self, locator: &str) -> Result<()> {
        self.source = Some(locator.to_string());
        self.paused = true;
        self.current_time = 0.0;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.fail_play {
            return Err(crate::error::PlaybackError::SinkUnavailable(
                "device lost".to_string(),
            ));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}
