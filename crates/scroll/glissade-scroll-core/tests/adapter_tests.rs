use glissade_scroll_core::{EngineConfig, Orientation, ScrollAdapter, ScrollToOptions};
use glissade_test_fixtures::{FrameStepper, RecordingProvider};

use glissade_api_core::{ElementId, ScrollError};

/// it should feed exactly N raf calls for N ticks, strictly in call order
#[test]
fn tick_feeds_engine_once_per_frame() {
    let mut provider = RecordingProvider::new();
    let log = provider.log();
    let mut adapter = ScrollAdapter::initialize(EngineConfig::default(), &mut provider)
        .expect("engine constructs");

    let mut frames = FrameStepper::default();
    let n = 240usize;
    for _ in 0..n {
        adapter.tick(frames.next());
    }

    let log = log.borrow();
    assert_eq!(log.raf_times.len(), n);
    assert!(log.raf_times.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(adapter.frame_loop().frames(), n as u64);
    assert_eq!(adapter.frame_loop().last_timestamp_ms(), log.raf_times.last().copied());
}

/// it should pass the config through to the provider unchanged
#[test]
fn initialize_hands_config_to_provider() {
    let cfg = EngineConfig {
        duration_s: 0.8,
        smooth_touch: true,
        ..EngineConfig::default()
    };
    let mut provider = RecordingProvider::new();
    let adapter = ScrollAdapter::initialize(cfg.clone(), &mut provider).expect("engine constructs");
    assert_eq!(provider.constructed, 1);
    assert_eq!(provider.last_config.as_ref(), Some(&cfg));
    assert_eq!(adapter.config(), &cfg);
}

/// it should surface provider failure as EngineUnavailable
#[test]
fn initialize_surfaces_engine_unavailable() {
    let mut provider = RecordingProvider::failing("no window");
    let err = ScrollAdapter::initialize(EngineConfig::default(), &mut provider)
        .err()
        .expect("initialization fails");
    match err {
        ScrollError::EngineUnavailable { reason } => assert_eq!(reason, "no window"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(provider.constructed, 0);
}

/// it should forward scroll_to to the engine with the caller's options
#[test]
fn scroll_to_delegates_to_engine() {
    let mut provider = RecordingProvider::new();
    let log = provider.log();
    let mut adapter = ScrollAdapter::initialize(EngineConfig::default(), &mut provider)
        .expect("engine constructs");

    let target = ElementId(7);
    adapter.scroll_to(
        target,
        ScrollToOptions {
            offset_px: -100.0,
            duration_s: 1.5,
        },
    );

    let log = log.borrow();
    assert_eq!(log.scroll_calls.len(), 1);
    assert_eq!(log.scroll_calls[0].target, target);
    assert_eq!(log.scroll_calls[0].opts.offset_px, -100.0);
    assert_eq!(log.scroll_calls[0].opts.duration_s, 1.5);
}

/// it should round-trip the default config through serde with defaults intact
#[test]
fn config_serde_roundtrip_and_defaults() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.duration_s, 1.2);
    assert_eq!(cfg.orientation, Orientation::Vertical);
    assert_eq!(cfg.gesture_orientation, Orientation::Vertical);
    assert!(cfg.smooth_wheel);
    assert_eq!(cfg.wheel_multiplier, 1.0);
    assert!(!cfg.smooth_touch);
    assert_eq!(cfg.touch_multiplier, 2.0);
    assert!(!cfg.infinite);

    let s = serde_json::to_string(&cfg).unwrap();
    let cfg2: EngineConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(cfg, cfg2);
}
