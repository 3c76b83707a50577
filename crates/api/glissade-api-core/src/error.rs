//! Error taxonomy for setup and anchor resolution.

use thiserror::Error;

/// Errors surfaced by initialization and anchor handling.
#[derive(Debug, Error)]
pub enum ScrollError {
    /// The external engine could not be constructed; nothing after the
    /// failing step is set up.
    #[error("scroll engine unavailable: {reason}")]
    EngineUnavailable { reason: String },

    /// An anchor's fragment resolved to no element. Recovered locally at the
    /// click site; default navigation stays suppressed.
    #[error("no element matches anchor selector {selector:?}")]
    TargetNotFound { selector: String },

    /// Initialization was requested before the document became interactive.
    /// Hosts defer setup to the content-loaded signal instead.
    #[error("document is still loading; defer initialization")]
    DocumentLoading,
}
