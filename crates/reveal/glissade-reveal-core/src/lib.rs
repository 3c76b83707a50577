//! Scroll-triggered reveal marking.
//!
//! Elements carrying the selector class are watched through the host's
//! intersection facility; once one crosses the visibility threshold it is
//! marked with the marker class. The transition is one-directional: marked
//! elements never revert, and the observer keeps watching for the page's
//! lifetime (no unobserve-on-reveal).

pub mod config;

use hashbrown::HashSet;

use glissade_api_core::{DomHost, ElementId, IntersectionEntry};

pub use config::RevealConfig;

/// Per-element reveal state. `Revealed` is terminal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

/// Watches the designated elements and applies the marker class once each
/// crosses the visibility threshold.
#[derive(Debug)]
pub struct RevealObserver {
    cfg: RevealConfig,
    watched: Vec<ElementId>,
    revealed: HashSet<ElementId>,
}

impl RevealObserver {
    /// Select every element carrying the selector class and start watching.
    /// An empty selection is fine; the observer simply watches nothing.
    pub fn start(cfg: RevealConfig, dom: &dyn DomHost) -> Self {
        let watched = dom.query_all(&cfg.selector());
        log::debug!(
            "watching {} elements for reveal (threshold {})",
            watched.len(),
            cfg.threshold
        );
        Self {
            cfg,
            watched,
            revealed: HashSet::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RevealConfig {
        &self.cfg
    }

    /// Elements registered for observation, in document order.
    pub fn watched(&self) -> &[ElementId] {
        &self.watched
    }

    pub fn state(&self, el: ElementId) -> RevealState {
        if self.revealed.contains(&el) {
            RevealState::Revealed
        } else {
            RevealState::Unrevealed
        }
    }

    /// Apply one batch of intersection entries. Entries are independent and
    /// commutative; order inside the batch does not matter. Marking is set
    /// membership: the class is added on the first threshold crossing and
    /// the element never reverts.
    pub fn on_entries(&mut self, entries: &[IntersectionEntry], dom: &mut dyn DomHost) {
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < self.cfg.threshold {
                continue;
            }
            if self.revealed.insert(entry.target) {
                dom.add_class(entry.target, &self.cfg.marker_class);
            }
        }
    }
}
