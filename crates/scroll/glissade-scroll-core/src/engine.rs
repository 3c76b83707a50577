//! External engine traits.
//!
//! The smooth-scroll engine is a black box honoring standard easing/duration
//! semantics. The core consumes exactly two instance operations: a per-frame
//! timestamp feed and scroll-to. Hosts construct the engine through an
//! EngineProvider so that construction failure can be surfaced.

use serde::{Deserialize, Serialize};

use glissade_api_core::ElementId;

use crate::config::EngineConfig;

/// Per-request scroll options.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollToOptions {
    /// Offset in pixels from the target's default alignment.
    pub offset_px: f32,
    /// Animation duration in seconds for this request.
    pub duration_s: f32,
}

/// Consumed surface of the external smooth-scroll engine.
pub trait ScrollEngine {
    /// Feed the current frame timestamp (milliseconds).
    fn raf(&mut self, now_ms: f64);

    /// Animate the viewport so `target` lands at the requested offset.
    fn scroll_to(&mut self, target: ElementId, opts: ScrollToOptions);
}

/// Trait for constructing the external engine from a config.
/// Adapters (web/test) implement this and pass into ScrollAdapter::initialize().
pub trait EngineProvider {
    /// Construct one engine instance. The error string becomes the
    /// `EngineUnavailable` reason.
    fn construct(&mut self, cfg: &EngineConfig) -> Result<Box<dyn ScrollEngine>, String>;
}
