//! Engine configuration.
//!
//! Fixed at initialization; the adapter never reconfigures a live engine.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Scroll / gesture axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Configuration handed to the external engine's constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Animation duration in seconds.
    pub duration_s: f32,
    /// Easing curve applied to scroll animations.
    pub easing: Easing,
    pub orientation: Orientation,
    pub gesture_orientation: Orientation,
    /// Whether wheel input is smoothed.
    pub smooth_wheel: bool,
    pub wheel_multiplier: f32,
    /// Whether touch input is smoothed (off by default on touch surfaces).
    pub smooth_touch: bool,
    pub touch_multiplier: f32,
    /// Whether scrolling wraps infinitely.
    pub infinite: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duration_s: 1.2,
            easing: Easing::OutExpo,
            orientation: Orientation::Vertical,
            gesture_orientation: Orientation::Vertical,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            smooth_touch: false,
            touch_multiplier: 2.0,
            infinite: false,
        }
    }
}
