//! glissade-api-core: shared host contracts (core, host-agnostic)

pub mod dom;
pub mod error;
pub mod ids;
pub mod intersection;

pub use dom::{DomHost, ReadyState};
pub use error::ScrollError;
pub use ids::{ElementId, ElementIdAllocator};
pub use intersection::IntersectionEntry;
