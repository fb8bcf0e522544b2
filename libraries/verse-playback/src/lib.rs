//! Verse Player - Playback Core
//!
//! Platform-agnostic playback and navigation for Verse Player.
//!
//! This crate provides:
//! - `PlaybackEngine`: session tracking, transport (play/pause), forward and
//!   backward navigation with wraparound and shuffle, seek and scrub
//! - `NavigationController`: translates UI intents into engine calls and
//!   queues state-change events for a UI binder
//! - `AudioSink`: the platform audio abstraction both are built on
//!
//! # Architecture
//!
//! `verse-playback` is completely platform-agnostic: no DOM, no storage, no
//! audio backend. The audio sink and the data provider are injected; the UI
//! binder drains events. Everything runs synchronously on the caller's event
//! loop, and the sink's internal playback is the only asynchronous boundary
//! (reported back via the `progress_update`/`on_ended`/`on_sink_error`
//! notification handlers).
//!
//! # Example
//!
//! ```rust
//! use verse_core::{TrackId, TrackRef};
//! use verse_playback::{
//!     AudioSink, NavigationController, PlaybackEngine, PlayerConfig, PlayerEvent, Result,
//! };
//!
//! // A minimal in-memory sink standing in for the platform media element.
//! #[derive(Default)]
//! struct MemorySink {
//!     source: Option<String>,
//!     playing: bool,
//!     volume: f32,
//!     muted: bool,
//!     position: f64,
//!     duration: f64,
//! }
//!
//! impl MemorySink {
//!     fn new() -> Self {
//!         Self { volume: 1.0, duration: f64::NAN, ..Self::default() }
//!     }
//! }
//!
//! impl AudioSink for MemorySink {
//!     fn load(&mut self, locator: &str) -> Result<()> {
//!         self.source = Some(locator.to_string());
//!         self.playing = false;
//!         self.position = 0.0;
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         self.playing = true;
//!         Ok(())
//!     }
//!     fn pause(&mut self) {
//!         self.playing = false;
//!     }
//!     fn paused(&self) -> bool {
//!         !self.playing
//!     }
//!     fn source(&self) -> Option<&str> {
//!         self.source.as_deref()
//!     }
//!     fn volume(&self) -> f32 {
//!         self.volume
//!     }
//!     fn set_volume(&mut self, volume: f32) {
//!         self.volume = volume;
//!     }
//!     fn muted(&self) -> bool {
//!         self.muted
//!     }
//!     fn set_muted(&mut self, muted: bool) {
//!         self.muted = muted;
//!     }
//!     fn current_time(&self) -> f64 {
//!         self.position
//!     }
//!     fn set_current_time(&mut self, seconds: f64) {
//!         self.position = seconds.max(0.0);
//!     }
//!     fn duration(&self) -> f64 {
//!         self.duration
//!     }
//! }
//!
//! let engine = PlaybackEngine::new(MemorySink::new());
//! let mut controller = NavigationController::new(engine, PlayerConfig::default());
//!
//! controller.load(vec![
//!     TrackRef::new(TrackId::new(0), "media/01_song.mp3"),
//!     TrackRef::new(TrackId::new(1), "media/02_song.mp3"),
//! ])?;
//!
//! controller.play_or_pause(TrackId::new(0))?;
//! controller.next()?;
//!
//! for event in controller.take_events() {
//!     if let PlayerEvent::CurrentTrackChanged { track_id } = event {
//!         println!("now playing track {track_id}");
//!     }
//! }
//! # Ok::<(), verse_playback::PlaybackError>(())
//! ```

mod controller;
mod engine;
mod error;
mod events;
mod format;
mod session;
mod sink;
pub mod types;

// Public exports
pub use controller::NavigationController;
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use events::{PlayerEvent, TransportState};
pub use format::format_time;
pub use session::PlaybackSession;
pub use sink::AudioSink;
pub use types::{Command, Direction, PlaybackState, PlayerConfig};
