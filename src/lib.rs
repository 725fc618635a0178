/*!
contact-patch
=============

**contact-patch** extracts the contact region between two triangulated 3D
solids and fits a circle or an ellipse to it.

The crate is a geometric back-end for robot motion planning. The first
solid is the volume swept by a robot movement and the second is a surface
patch the robot can act on. Once an external narrow-phase test reports
that the two touch or overlap, [`query::intersection_points`] computes the
boundary of the overlapping area and
[`fitting::approximate_contact_shape`] summarizes it as a compact
parametric shape.

The individual stages are usable on their own:

- [`query::triangle_triangle_intersection`] computes the segment bounding
  the intersection of two 3D triangles.
- [`query::HalfSpaceSystem`] tests the containment of a point in a convex
  solid.
- [`transformation::planar_convex_hull`] and
  [`transformation::refine_boundary`] extract the boundary of a
  near-coplanar point cloud.
- [`fitting::fit_plane`], [`fitting::fit_conic`] and
  [`fitting::recover_conic`] are the underlying least-squares fits.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod fitting;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitQuaternion, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The tolerance below which a scalar is treated as zero by the
    /// geometric queries and filters of this crate.
    pub const EPS: Real = 1.0e-6;

    /// The dimension of the ambient space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
