//! Host DOM trait.
//!
//! The cores consume a narrow slice of the host document: query-by-selector,
//! attribute reads, class-list mutation, and the ready state. Hosts (web,
//! test) implement this and pass themselves into the cores by parameter.

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// Document readiness as reported by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ReadyState {
    /// Still parsing; setup must be deferred.
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// True once setup may proceed.
    #[inline]
    pub fn is_interactive(self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

/// Trait for the host document consumed by the cores.
/// Adapters (web/test) implement this; element handles are host-interned ids.
pub trait DomHost {
    fn ready_state(&self) -> ReadyState;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    /// Attribute value on `el`, if present.
    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;

    /// Add `class` to `el`'s class list (set membership; re-adding is a no-op).
    fn add_class(&mut self, el: ElementId, class: &str);

    fn has_class(&self, el: ElementId, class: &str) -> bool;
}
