//! Pairwise geometric queries: triangle intersection, containment
//! filtering and contact-region extraction.

pub use self::contact_region::intersection_points;
pub use self::half_space::HalfSpaceSystem;
pub use self::narrow_phase::{BruteForceNarrowPhase, NarrowPhase, DEFAULT_MAX_CONTACTS};
pub use self::triangle_triangle::{triangle_triangle_intersection, DegenerateGeometry};

mod contact_region;
mod half_space;
mod narrow_phase;
mod triangle_triangle;
