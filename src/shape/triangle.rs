//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, UnitVector, Vector, EPS};
use crate::shape::PlaneEquation;

/// A triangle with vertices in consistent winding.
///
/// Triangles are ephemeral values: they are built per-use from a mesh and a
/// pose and never persisted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// An array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal to this triangle, scaled by twice its area.
    ///
    /// The scaled normal is collinear to `AB × AC`, so its orientation
    /// follows the triangle winding.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle, or `None` if it is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        UnitVector::try_new(self.scaled_normal(), EPS)
    }

    /// The plane equation supporting this triangle.
    ///
    /// The plane normal is the scaled normal of the triangle; the sign
    /// convention of signed distances to the plane therefore follows the
    /// triangle winding.
    #[inline]
    pub fn plane(&self) -> PlaneEquation {
        let normal = self.scaled_normal();
        let d = -normal.dot(&self.a.coords);
        PlaneEquation::new(normal, d)
    }

    /// Returns a new triangle with vertices transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }
}

#[cfg(test)]
mod test {
    use super::Triangle;
    use crate::math::{Point, Vector};

    #[test]
    fn scaled_normal_follows_winding() {
        let tri = Triangle::new(
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(tri.scaled_normal(), Vector::new(0.0, 0.0, 1.0));

        let flipped = Triangle::new(tri.a, tri.c, tri.b);
        assert_relative_eq!(flipped.scaled_normal(), Vector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn plane_contains_vertices() {
        let tri = Triangle::new(
            Point::new(1.0, 2.0, 3.0),
            Point::new(-2.0, 0.5, 1.0),
            Point::new(0.0, -1.0, 2.0),
        );
        let plane = tri.plane();

        for pt in tri.vertices() {
            assert_relative_eq!(plane.signed_distance(&pt), 0.0, epsilon = 1.0e-9);
        }
    }
}
