//! Reveal observer configuration.

use serde::{Deserialize, Serialize};

/// Fixed at start(); the observer is never reconfigured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of the element's area that must intersect the viewport.
    pub threshold: f32,
    /// Pixels shaved off the bottom of the effective viewport.
    pub bottom_margin_px: f32,
    /// Class naming the elements to watch.
    pub selector_class: String,
    /// Class added once an element reveals.
    pub marker_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 100.0,
            selector_class: "animate-on-scroll".to_string(),
            marker_class: "animate-in".to_string(),
        }
    }
}

impl RevealConfig {
    /// Class selector for the watched elements.
    pub fn selector(&self) -> String {
        format!(".{}", self.selector_class)
    }

    /// Root margin in CSS order (top right bottom left) for hosts backed by
    /// a real intersection observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}
