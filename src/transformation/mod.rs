//! Boundary extraction of near-coplanar point clouds.

pub use self::planar_hull::{planar_convex_hull, refine_boundary};

mod planar_hull;
