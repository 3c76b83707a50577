//! Glissade Scroll Core (host-agnostic)
//!
//! Owns the external smooth-scroll engine behind a trait: configuration,
//! easing curves, the adapter constructed once per page session, and the
//! explicit frame loop the host steps each animation frame.

pub mod adapter;
pub mod config;
pub mod easing;
pub mod engine;

// Re-exports for consumers (adapters)
pub use adapter::{FrameLoop, ScrollAdapter};
pub use config::{EngineConfig, Orientation};
pub use easing::Easing;
pub use engine::{EngineProvider, ScrollEngine, ScrollToOptions};
pub use glissade_api_core::{ElementId, ScrollError};
