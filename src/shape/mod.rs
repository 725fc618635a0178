//! Value-type geometric primitives consumed by the queries and fitters.

pub use self::plane::{HalfSpace, PlaneEquation};
pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{Solid, TriMesh};

mod plane;
mod segment;
mod triangle;
mod trimesh;
