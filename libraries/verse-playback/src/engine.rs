//! Playback engine - transport and navigation over an audio sink
//!
//! Owns the active session and the sink. All operations run synchronously
//! on the caller's event loop; the sink's internal decoding is the only
//! asynchronous boundary and reports back via notifications handled by the
//! controller.

use crate::{
    error::{PlaybackError, Result},
    session::PlaybackSession,
    sink::AudioSink,
    types::{Direction, PlaybackState},
};
use rand::Rng;
use tracing::debug;
use verse_core::{TrackId, TrackRef};

/// Transport core for one audio sink
///
/// The sink is an injected dependency, never a module-level singleton, so
/// the engine is testable against a fake.
pub struct PlaybackEngine<S: AudioSink> {
    session: Option<PlaybackSession>,
    shuffle: bool,
    sink: S,
}

impl<S: AudioSink> PlaybackEngine<S> {
    /// Create an engine around a sink, shuffle off, no session
    pub fn new(sink: S) -> Self {
        Self {
            session: None,
            shuffle: false,
            sink,
        }
    }

    /// Replace the session with a new ordered track list
    ///
    /// The current id becomes the first track's id. Playback does not
    /// start. A rejected list (empty or duplicate ids) leaves any previous
    /// session untouched.
    pub fn load(&mut self, tracks: Vec<TrackRef>) -> Result<()> {
        let session = PlaybackSession::new(tracks)?;
        debug!(len = session.len(), current = %session.current_id(), "session loaded");
        self.session = Some(session);
        Ok(())
    }

    /// Source locator for a track id in the active session
    pub fn lookup_locator(&self, id: TrackId) -> Result<&str> {
        self.session()?.locator(id)
    }

    /// The track whose id is current
    pub fn current_track(&self) -> Result<&TrackRef> {
        let session = self.session()?;
        session.track(session.current_id())
    }

    /// Load the sink with a track and start playback
    ///
    /// If the track's locator equals the sink's previously loaded source,
    /// the position recorded before the reload is restored, so replaying
    /// the current track resumes where it was. Any other locator starts
    /// at 0.
    pub fn play_at(&mut self, id: TrackId) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or(PlaybackError::NoSessionLoaded)?;
        let locator = session.locator(id)?.to_owned();
        session.set_current(id)?;

        let time_record = self.sink.current_time();
        let same_source = self.sink.source() == Some(locator.as_str());

        self.sink.load(&locator)?;
        self.sink
            .set_current_time(if same_source { time_record } else { 0.0 });
        debug!(track = %id, resume = same_source, "play");
        self.sink.play()
    }

    /// Pause if playing; otherwise re-trigger `play_at` on the current id
    ///
    /// Pausing is a pure pause. Resuming goes through the load-and-resume
    /// path so the sink's source state is re-evaluated, which is what makes
    /// resume land on the recorded position.
    pub fn toggle_pause(&mut self) -> Result<()> {
        if !self.sink.paused() {
            self.sink.pause();
            debug!("paused");
            return Ok(());
        }
        let id = self.session()?.current_id();
        self.play_at(id)
    }

    /// Move to the next or previous track and play it
    ///
    /// With shuffle on, picks a uniformly random session position (the
    /// current track included) regardless of direction. With shuffle off,
    /// steps through playlist order with modulo wraparound at both ends.
    pub fn advance(&mut self, direction: Direction) -> Result<()> {
        let session = self.session()?;
        let len = session.len();

        let next_id = if self.shuffle {
            let position = rand::thread_rng().gen_range(0..len);
            session.track_at(position).id
        } else {
            let position = session.position_of(session.current_id())? as i64;
            let step: i64 = match direction {
                Direction::Forward => 1,
                Direction::Backward => -1,
            };
            let wrapped = (position + step).rem_euclid(len as i64) as usize;
            session.track_at(wrapped).id
        };

        self.play_at(next_id)
    }

    /// Seek to an absolute position given as a percentage of duration
    ///
    /// No-op while the sink's duration is still unknown.
    ///
    /// # Errors
    /// `InvalidSeekPercent` outside `0..=100`; no state changes.
    pub fn seek_to_fraction(&mut self, percent: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PlaybackError::InvalidSeekPercent(percent));
        }

        let duration = self.sink.duration();
        if duration.is_nan() {
            return Ok(());
        }
        self.sink.set_current_time(percent / 100.0 * duration);
        Ok(())
    }

    /// Adjust the position by a signed number of seconds
    ///
    /// The result is not clamped to `[0, duration]` here; the sink owns
    /// clamping.
    pub fn scrub_by(&mut self, delta_seconds: f64) {
        let target = self.sink.current_time() + delta_seconds;
        self.sink.set_current_time(target);
    }

    /// Flip the volume between 0.0 and 1.0, returning the logical muted state
    ///
    /// This is the volume-based mute; the sink's native `muted` flag is a
    /// separate toggle (`toggle_native_mute`) and synchronization between
    /// the two belongs to the UI binder.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.sink.volume() > 0.0;
        self.sink.set_volume(if muted { 0.0 } else { 1.0 });
        muted
    }

    /// Flip the sink's native mute flag, returning the new value
    pub fn toggle_native_mute(&mut self) -> bool {
        let muted = !self.sink.muted();
        self.sink.set_muted(muted);
        muted
    }

    /// Flip shuffle mode, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Set shuffle mode directly
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle = enabled;
    }

    /// Current shuffle mode
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Derived lifecycle state
    pub fn state(&self) -> PlaybackState {
        if self.session.is_none() {
            PlaybackState::Idle
        } else if self.sink.source().is_none() {
            PlaybackState::Loaded
        } else if self.sink.paused() {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    /// Read access to the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink (platform integration only)
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn session(&self) -> Result<&PlaybackSession> {
        self.session.as_ref().ok_or(PlaybackError::NoSessionLoaded)
    }
}
