//! Adapter: engine ownership and public API.
//!
//! Methods:
//! - initialize (provider), tick (frame feed), scroll_to

use glissade_api_core::{ElementId, ScrollError};

use crate::config::EngineConfig;
use crate::engine::{EngineProvider, ScrollEngine, ScrollToOptions};

/// Explicit frame task, stepped by the host scheduler.
///
/// Each tick feeds the engine exactly once and then yields; the host
/// reschedules for the remaining lifetime of the page. There is no
/// cancellation.
#[derive(Default, Debug)]
pub struct FrameLoop {
    frames: u64,
    last_ms: Option<f64>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn advance(&mut self, now_ms: f64) {
        self.frames = self.frames.wrapping_add(1);
        self.last_ms = Some(now_ms);
    }

    /// Frames fed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Timestamp of the most recent frame, if any.
    #[inline]
    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_ms
    }
}

/// Owns the single engine instance for the page session.
pub struct ScrollAdapter {
    cfg: EngineConfig,
    engine: Box<dyn ScrollEngine>,
    frame_loop: FrameLoop,
}

impl ScrollAdapter {
    /// Construct the engine through `provider` and take ownership of it.
    /// Provider failure is surfaced; the caller decides how to degrade.
    pub fn initialize(
        cfg: EngineConfig,
        provider: &mut dyn EngineProvider,
    ) -> Result<Self, ScrollError> {
        let engine = provider
            .construct(&cfg)
            .map_err(|reason| ScrollError::EngineUnavailable { reason })?;
        log::debug!(
            "scroll engine initialized (duration {}s, easing {:?})",
            cfg.duration_s,
            cfg.easing
        );
        Ok(Self {
            cfg,
            engine,
            frame_loop: FrameLoop::new(),
        })
    }

    /// Feed one frame timestamp to the engine. Strictly ordered: one call,
    /// one engine update.
    pub fn tick(&mut self, now_ms: f64) {
        self.engine.raf(now_ms);
        self.frame_loop.advance(now_ms);
    }

    /// Request an animated scroll to `target`. No return value; callers only
    /// invoke this with a resolved target.
    pub fn scroll_to(&mut self, target: ElementId, opts: ScrollToOptions) {
        self.engine.scroll_to(target, opts);
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    #[inline]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }
}
