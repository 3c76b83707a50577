//! Intersection observation contract.
//!
//! Hosts deliver entries in batches, one batch per visibility-change tick.
//! Ordering inside a batch is not significant; per-element handling must be
//! independent.

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// One observed element's visibility at a change tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: ElementId,
    /// Fraction of the element's area intersecting the effective viewport.
    pub ratio: f32,
    pub is_intersecting: bool,
}
