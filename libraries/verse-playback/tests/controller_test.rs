//! Integration tests for the navigation controller
//!
//! Drives the full controller -> engine -> sink path with a scripted fake
//! sink and checks the event stream the UI binder would see.

use verse_core::{TrackId, TrackRef};
use verse_playback::{
    AudioSink, Command, NavigationController, PlaybackEngine, PlaybackError, PlaybackState,
    PlayerConfig, PlayerEvent, Result, TransportState,
};

// ===== Test sink =====

/// Scripted stand-in for the platform media element
struct TestSink {
    source: Option<String>,
    paused: bool,
    volume: f32,
    muted: bool,
    current_time: f64,
    duration: f64,
    fail_play: bool,
}

impl TestSink {
    fn new() -> Self {
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

impl AudioSink for TestSink {
    fn load(&mut self, locator: &str) -> Result<()> {
        self.source = Some(locator.to_string());
        self.paused = true;
        self.current_time = 0.0;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.fail_play {
            return Err(PlaybackError::SinkUnavailable("stream stalled".to_string()));
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
        // A real media element clamps; keep the lower bound here so tests
        // that scrub backward past zero see the sink-side clamp.
        self.current_time = seconds.max(0.0);
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

// ===== Helpers =====

fn tracks(ids: &[u32]) -> Vec<TrackRef> {
    ids.iter()
        .map(|&id| TrackRef::new(TrackId::new(id), format!("media/{:02}_song.mp3", id + 1)))
        .collect()
}

fn controller_with(ids: &[u32]) -> NavigationController<TestSink> {
    let engine = PlaybackEngine::new(TestSink::new());
    let mut controller = NavigationController::new(engine, PlayerConfig::default());
    controller.load(tracks(ids)).unwrap();
    controller.take_events();
    controller
}

fn current_id(controller: &NavigationController<TestSink>) -> TrackId {
    controller.engine().current_track().unwrap().id
}

// ===== Session load =====

#[test]
fn load_announces_first_track() {
    let engine = PlaybackEngine::new(TestSink::new());
    let mut controller = NavigationController::new(engine, PlayerConfig::default());

    controller.load(tracks(&[2, 0, 1])).unwrap();

    let events = controller.take_events();
    assert_eq!(
        events,
        vec![PlayerEvent::CurrentTrackChanged {
            track_id: TrackId::new(2)
        }]
    );
    assert_eq!(controller.engine().state(), PlaybackState::Loaded);
}

#[test]
fn load_empty_fails_and_emits_nothing() {
    let engine = PlaybackEngine::new(TestSink::new());
    let mut controller = NavigationController::new(engine, PlayerConfig::default());

    let result = controller.load(vec![]);
    assert!(matches!(result, Err(PlaybackError::EmptyTrackList)));
    assert!(controller.take_events().is_empty());
    assert_eq!(controller.engine().state(), PlaybackState::Idle);
}

// ===== Transport =====

#[test]
fn play_or_pause_plays_given_id_while_paused() {
    let mut controller = controller_with(&[0, 1, 2]);

    controller.play_or_pause(TrackId::new(1)).unwrap();

    assert_eq!(current_id(&controller), TrackId::new(1));
    assert_eq!(
        controller.take_events(),
        vec![
            PlayerEvent::TransportStateChanged {
                state: TransportState::Playing
            },
            PlayerEvent::CurrentTrackChanged {
                track_id: TrackId::new(1)
            },
        ]
    );
}

#[test]
fn play_or_pause_while_playing_pauses_regardless_of_id() {
    let mut controller = controller_with(&[0, 1, 2]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.take_events();

    // A different id makes no difference while playing
    controller.play_or_pause(TrackId::new(2)).unwrap();

    assert_eq!(current_id(&controller), TrackId::new(0));
    assert!(controller.engine().sink().paused());
    assert_eq!(
        controller.take_events(),
        vec![
            PlayerEvent::TransportStateChanged {
                state: TransportState::Paused
            },
            PlayerEvent::CurrentTrackChanged {
                track_id: TrackId::new(0)
            },
        ]
    );
}

#[test]
fn play_or_pause_resumes_where_it_paused() {
    let mut controller = controller_with(&[0, 1]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.engine_mut().sink_mut().current_time = 55.0;

    controller.play_or_pause(TrackId::new(0)).unwrap();
    assert!(controller.engine().sink().paused());
    assert_eq!(controller.engine().sink().current_time(), 55.0);

    controller.play_or_pause(TrackId::new(0)).unwrap();
    assert!(!controller.engine().sink().paused());
    assert_eq!(controller.engine().sink().current_time(), 55.0);
}

// ===== Navigation =====

#[test]
fn previous_wraps_from_first_to_last() {
    let mut controller = controller_with(&[0, 1, 2]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.take_events();

    controller.previous().unwrap();

    assert_eq!(current_id(&controller), TrackId::new(2));
    assert_eq!(
        controller.take_events(),
        vec![
            PlayerEvent::TransportStateChanged {
                state: TransportState::Playing
            },
            PlayerEvent::CurrentTrackChanged {
                track_id: TrackId::new(2)
            },
        ]
    );
}

#[test]
fn ended_notification_advances_like_next() {
    let mut controller = controller_with(&[0, 1, 2]);
    controller.play_or_pause(TrackId::new(2)).unwrap();
    controller.take_events();

    controller.on_ended().unwrap();

    // Wraps from the last track back to the first, still playing
    assert_eq!(current_id(&controller), TrackId::new(0));
    assert_eq!(controller.engine().state(), PlaybackState::Playing);
}

#[test]
fn navigation_without_session_fails() {
    let engine = PlaybackEngine::new(TestSink::new());
    let mut controller = NavigationController::new(engine, PlayerConfig::default());

    assert!(matches!(
        controller.next(),
        Err(PlaybackError::NoSessionLoaded)
    ));
    assert!(matches!(
        controller.dispatch(Command::PlayPause),
        Err(PlaybackError::NoSessionLoaded)
    ));
}

// ===== Progress =====

#[test]
fn progress_with_known_duration() {
    let mut controller = controller_with(&[0]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.take_events();

    controller.engine_mut().sink_mut().duration = 200.0;
    controller.engine_mut().sink_mut().current_time = 65.0;
    controller.progress_update();

    assert_eq!(
        controller.take_events(),
        vec![PlayerEvent::Progress {
            percent: 32.5,
            current_time: "1:05".to_string(),
            duration: Some("3:20".to_string()),
        }]
    );
}

#[test]
fn progress_with_unknown_duration_withholds_duration_text() {
    let mut controller = controller_with(&[0]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.take_events();

    // Metadata not loaded yet: duration is still NaN
    controller.engine_mut().sink_mut().current_time = 7.0;
    controller.progress_update();

    assert_eq!(
        controller.take_events(),
        vec![PlayerEvent::Progress {
            percent: 0.0,
            current_time: "0:07".to_string(),
            duration: None,
        }]
    );
}

// ===== Sink failures =====

#[test]
fn sink_error_notification_reverts_to_paused() {
    let mut controller = controller_with(&[0]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.take_events();

    controller.on_sink_error("decode failed");

    assert_eq!(
        controller.take_events(),
        vec![
            PlayerEvent::SinkError {
                message: "decode failed".to_string()
            },
            PlayerEvent::TransportStateChanged {
                state: TransportState::Paused
            },
        ]
    );
}

#[test]
fn failed_advance_reports_paused_and_propagates() {
    let mut controller = controller_with(&[0, 1]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.take_events();

    controller.engine_mut().sink_mut().fail_play = true;
    let result = controller.next();

    assert!(matches!(result, Err(PlaybackError::SinkUnavailable(_))));
    assert_eq!(
        controller.take_events(),
        vec![PlayerEvent::TransportStateChanged {
            state: TransportState::Paused
        }]
    );
}

// ===== Mute and shuffle =====

#[test]
fn toggle_mute_flips_volume_and_announces() {
    let mut controller = controller_with(&[0]);

    assert!(controller.toggle_mute());
    assert_eq!(controller.engine().sink().volume(), 0.0);

    assert!(!controller.toggle_mute());
    assert_eq!(controller.engine().sink().volume(), 1.0);

    assert_eq!(
        controller.take_events(),
        vec![
            PlayerEvent::MuteChanged { muted: true },
            PlayerEvent::MuteChanged { muted: false },
        ]
    );
}

#[test]
fn toggle_shuffle_announces_and_config_presets_it() {
    let mut controller = controller_with(&[0]);
    assert!(controller.toggle_shuffle());
    assert_eq!(
        controller.take_events(),
        vec![PlayerEvent::ShuffleChanged { enabled: true }]
    );

    let engine = PlaybackEngine::new(TestSink::new());
    let config = PlayerConfig {
        shuffle: true,
        ..PlayerConfig::default()
    };
    let controller = NavigationController::new(engine, config);
    assert!(controller.engine().shuffle());
}

// ===== Shortcut dispatch =====

#[test]
fn dispatch_scrub_uses_configured_skip() {
    let engine = PlaybackEngine::new(TestSink::new());
    let config = PlayerConfig {
        skip_seconds: 10.0,
        ..PlayerConfig::default()
    };
    let mut controller = NavigationController::new(engine, config);
    controller.load(tracks(&[0])).unwrap();
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.engine_mut().sink_mut().current_time = 30.0;

    controller.dispatch(Command::ScrubForward).unwrap();
    assert_eq!(controller.engine().sink().current_time(), 40.0);

    controller.dispatch(Command::ScrubBackward).unwrap();
    controller.dispatch(Command::ScrubBackward).unwrap();
    assert_eq!(controller.engine().sink().current_time(), 20.0);
}

#[test]
fn dispatch_scrub_backward_past_zero_clamps_at_sink() {
    let mut controller = controller_with(&[0]);
    controller.play_or_pause(TrackId::new(0)).unwrap();
    controller.engine_mut().sink_mut().current_time = 2.0;

    controller.dispatch(Command::ScrubBackward).unwrap();

    // The engine passes -3.0 through; the sink clamps
    assert_eq!(controller.engine().sink().current_time(), 0.0);
}

#[test]
fn dispatch_covers_transport_and_mute() {
    let mut controller = controller_with(&[0, 1, 2]);

    controller.dispatch(Command::PlayPause).unwrap();
    assert_eq!(controller.engine().state(), PlaybackState::Playing);

    controller.dispatch(Command::PlayPause).unwrap();
    assert_eq!(controller.engine().state(), PlaybackState::Paused);

    controller.dispatch(Command::NextTrack).unwrap();
    assert_eq!(current_id(&controller), TrackId::new(1));

    controller.dispatch(Command::PreviousTrack).unwrap();
    assert_eq!(current_id(&controller), TrackId::new(0));

    controller.dispatch(Command::ToggleMute).unwrap();
    assert_eq!(controller.engine().sink().volume(), 0.0);
}

// ===== Event serialization =====

#[test]
fn events_serialize_for_the_ui_binder() {
    let event = PlayerEvent::Progress {
        percent: 32.5,
        current_time: "1:05".to_string(),
        duration: None,
    };

    let json = serde_json::to_string(&event).unwrap();
    let back: PlayerEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
