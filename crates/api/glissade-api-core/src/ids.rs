//! Identifiers for host elements.
//!
//! Hosts intern the elements they hand to the cores and speak in dense ids
//! from then on. Ids are session-local and opaque to the cores.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u32);

/// Monotonic allocator for ElementId.
/// Dense indices improve cache locality; ids are opaque externally.
#[derive(Default, Debug)]
pub struct ElementIdAllocator {
    next: u32,
}

impl ElementIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = ElementIdAllocator::new();
        assert_eq!(alloc.alloc(), ElementId(0));
        assert_eq!(alloc.alloc(), ElementId(1));
        alloc.reset();
        assert_eq!(alloc.alloc(), ElementId(0));
    }
}
