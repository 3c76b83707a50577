//! Easing curves:
//! - Linear (identity)
//! - OutExpo (exponential ease-out, the default scroll feel)
//! - CubicBezier (css-style timing, x-inversion by bisection)

use serde::{Deserialize, Serialize};

/// Curve mapping normalized time in [0,1] to normalized progress in [0,1].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// `min(1, 1.001 - 2^(-10 t))`, clamped to 1 near the end of the run.
    OutExpo,
    /// Control points (x1, y1, x2, y2) with endpoints pinned at (0,0)/(1,1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::OutExpo
    }
}

impl Easing {
    /// Evaluate the curve at normalized time `t`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::OutExpo => {
                if t <= 0.0 {
                    0.0
                } else {
                    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
                }
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => bezier_ease_t(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
