//! Plane equation and half-space primitives.

use crate::math::{Point, Real, Vector, EPS};
use crate::shape::Triangle;

/// The equation `n·x + d = 0` of a plane.
///
/// The normal is not necessarily unit-length: a plane built from a triangle
/// keeps the triangle's scaled normal, so the signed distances it yields
/// are all scaled by the same positive constant. This preserves signs,
/// which is all the intersection queries rely on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PlaneEquation {
    /// The plane normal, oriented by the winding of the originating triangle.
    pub normal: Vector<Real>,
    /// The plane offset, such that `normal·x + d = 0` on the plane.
    pub d: Real,
}

impl PlaneEquation {
    /// Creates a plane equation from its normal and offset.
    #[inline]
    pub fn new(normal: Vector<Real>, d: Real) -> Self {
        PlaneEquation { normal, d }
    }

    /// The (scaled) signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.d
    }

    /// The signed distances of the three vertices of `tri` to this plane,
    /// with near-zero values snapped to exactly zero.
    ///
    /// Snapping keeps the "touching" class consistent: a vertex lying on
    /// the plane up to [`EPS`] never counts toward a strict-sign exclusion.
    #[inline]
    pub fn signed_distances(&self, tri: &Triangle) -> [Real; 3] {
        let snap = |dist: Real| if dist.abs() <= EPS { 0.0 } else { dist };
        [
            snap(self.signed_distance(&tri.a)),
            snap(self.signed_distance(&tri.b)),
            snap(self.signed_distance(&tri.c)),
        ]
    }
}

/// A half-space delimited by a plane, as one face inequality of a solid.
///
/// A point `x` satisfies the inequality whenever
/// `normal·(x − point) ≤ ε`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct HalfSpace {
    /// The outward normal of the boundary plane.
    pub normal: Vector<Real>,
    /// A point on the boundary plane.
    pub point: Point<Real>,
}

impl HalfSpace {
    /// Builds a new half-space from its boundary normal and a point on the
    /// boundary.
    #[inline]
    pub fn new(normal: Vector<Real>, point: Point<Real>) -> HalfSpace {
        HalfSpace { normal, point }
    }

    /// Tests whether `pt` satisfies this half-space inequality.
    ///
    /// Points on the boundary plane (within [`EPS`]) are accepted.
    #[inline]
    pub fn contains(&self, pt: &Point<Real>) -> bool {
        self.normal.dot(&(pt - self.point)) <= EPS
    }
}
