//! Anchor navigation binding.
//!
//! Scans every in-page anchor link once at bind time and converts click
//! events into engine scroll requests. The host suppresses default
//! navigation for bound anchors and forwards the click here; resolution of
//! the fragment happens at click time, so a target that appears between bind
//! and click still resolves.
//!
//! Elements inserted after bind() are not picked up; callers bind once per
//! page load.

use glissade_api_core::{DomHost, ElementId};
use glissade_scroll_core::{ScrollAdapter, ScrollToOptions};

/// Selector for in-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Offset in pixels applied to every anchor scroll.
pub const ANCHOR_SCROLL_OFFSET_PX: f32 = -100.0;

/// Duration in seconds for every anchor scroll.
pub const ANCHOR_SCROLL_DURATION_S: f32 = 1.5;

/// A bound anchor: the link element and the fragment selector recomputed
/// from its `href` at bind time.
#[derive(Clone, Debug)]
pub struct AnchorBinding {
    pub anchor: ElementId,
    /// The raw href value, e.g. `#section2`; treated as a selector on click.
    pub fragment: String,
}

/// What happened to a forwarded click.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The fragment resolved; a scroll was requested.
    Scrolled { target: ElementId },
    /// The fragment resolved to no element; no scroll was requested.
    /// Default navigation stays suppressed.
    TargetNotFound { fragment: String },
    /// The element was never bound; nothing happened.
    NotBound,
}

/// Binder holding the anchor bindings established at bind time.
#[derive(Debug, Default)]
pub struct AnchorNav {
    bindings: Vec<AnchorBinding>,
}

impl AnchorNav {
    /// Scan the document for in-page anchors and record their fragments.
    /// Each call builds a fresh binder; wiring two binders to one host
    /// duplicates handling, so hosts bind at most once per page load.
    pub fn bind(dom: &dyn DomHost) -> Self {
        let mut bindings = Vec::new();
        for anchor in dom.query_all(ANCHOR_SELECTOR) {
            if let Some(href) = dom.attribute(anchor, "href") {
                bindings.push(AnchorBinding {
                    anchor,
                    fragment: href,
                });
            }
        }
        log::debug!("bound {} in-page anchors", bindings.len());
        Self { bindings }
    }

    pub fn bindings(&self) -> &[AnchorBinding] {
        &self.bindings
    }

    pub fn is_bound(&self, el: ElementId) -> bool {
        self.bindings.iter().any(|b| b.anchor == el)
    }

    /// Handle a click on `anchor` whose default navigation the host already
    /// suppressed. Resolves the fragment and requests the scroll.
    pub fn on_click(
        &self,
        anchor: ElementId,
        dom: &dyn DomHost,
        adapter: &mut ScrollAdapter,
    ) -> ClickOutcome {
        let Some(binding) = self.bindings.iter().find(|b| b.anchor == anchor) else {
            return ClickOutcome::NotBound;
        };
        match dom.query(&binding.fragment) {
            Some(target) => {
                adapter.scroll_to(
                    target,
                    ScrollToOptions {
                        offset_px: ANCHOR_SCROLL_OFFSET_PX,
                        duration_s: ANCHOR_SCROLL_DURATION_S,
                    },
                );
                ClickOutcome::Scrolled { target }
            }
            None => {
                log::warn!(
                    "anchor fragment {:?} matches no element; skipping scroll",
                    binding.fragment
                );
                ClickOutcome::TargetNotFound {
                    fragment: binding.fragment.clone(),
                }
            }
        }
    }
}
