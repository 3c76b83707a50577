//! Top-level initializer for the scroll features.
//!
//! Construction order: engine adapter, then anchor binder, then reveal
//! observer. Engine failure aborts init before anything else is wired. The
//! returned handle owns all three components plus the host document and is
//! threaded to consumers explicitly; there is no module-level state.

use serde::{Deserialize, Serialize};

use glissade_api_core::{DomHost, ElementId, IntersectionEntry, ScrollError};
use glissade_nav_core::{AnchorNav, ClickOutcome};
use glissade_reveal_core::{RevealConfig, RevealObserver};
use glissade_scroll_core::{EngineConfig, EngineProvider, ScrollAdapter};

/// Combined configuration for one page session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

/// Owns the engine adapter, the anchor binder, the reveal observer, and the
/// host document for the lifetime of the page session.
pub struct ScrollFeatures<D: DomHost> {
    dom: D,
    adapter: ScrollAdapter,
    nav: AnchorNav,
    reveal: RevealObserver,
}

impl<D: DomHost> ScrollFeatures<D> {
    /// Set up everything once the document is interactive.
    ///
    /// Hosts seeing `Loading` defer this call until the content-loaded
    /// signal; calling early returns `DocumentLoading` without touching the
    /// provider.
    pub fn init(
        cfg: FeaturesConfig,
        dom: D,
        provider: &mut dyn EngineProvider,
    ) -> Result<Self, ScrollError> {
        if !dom.ready_state().is_interactive() {
            return Err(ScrollError::DocumentLoading);
        }
        let adapter = ScrollAdapter::initialize(cfg.engine, provider)?;
        let nav = AnchorNav::bind(&dom);
        let reveal = RevealObserver::start(cfg.reveal, &dom);
        log::debug!("scroll features initialized");
        Ok(Self {
            dom,
            adapter,
            nav,
            reveal,
        })
    }

    /// Feed one animation-frame timestamp to the engine.
    pub fn tick(&mut self, now_ms: f64) {
        self.adapter.tick(now_ms);
    }

    /// Forward a click whose default navigation the host suppressed.
    pub fn on_click(&mut self, anchor: ElementId) -> ClickOutcome {
        self.nav.on_click(anchor, &self.dom, &mut self.adapter)
    }

    /// Apply one batch of intersection entries to the reveal observer.
    pub fn on_entries(&mut self, entries: &[IntersectionEntry]) {
        self.reveal.on_entries(entries, &mut self.dom);
    }

    #[inline]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    #[inline]
    pub fn adapter(&self) -> &ScrollAdapter {
        &self.adapter
    }

    #[inline]
    pub fn nav(&self) -> &AnchorNav {
        &self.nav
    }

    #[inline]
    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }
}
