//! Best-fit plane of a 3D point cloud.

use crate::fitting::FitError;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::utils;
use na::Point2;

/// The frame of a fitted plane: unit normal, centroid and an orthonormal
/// in-plane basis.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneFrame {
    /// The unit normal of the plane (least-variance direction of the
    /// fitted cloud; its sign is arbitrary).
    pub normal: UnitVector<Real>,
    /// The centroid of the fitted cloud, taken as the plane origin.
    pub centroid: Point<Real>,
    basis: [Vector<Real>; 2],
}

impl PlaneFrame {
    /// The orthonormal in-plane basis `[u, v]`, such that `(u, v, normal)`
    /// is a right-handed frame.
    #[inline]
    pub fn basis(&self) -> &[Vector<Real>; 2] {
        &self.basis
    }

    /// The signed distance from `pt` to the plane, along the normal.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        (pt - self.centroid).dot(&self.normal)
    }

    /// Projects `pt` orthogonally onto the plane.
    #[inline]
    pub fn project(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal.into_inner() * self.signed_distance(pt)
    }

    /// The 2D coordinates of (the projection of) `pt` in the plane basis.
    #[inline]
    pub fn plane_coords(&self, pt: &Point<Real>) -> Point2<Real> {
        let v = pt - self.centroid;
        Point2::new(v.dot(&self.basis[0]), v.dot(&self.basis[1]))
    }

    /// Maps 2D plane coordinates back to a 3D point on the plane.
    #[inline]
    pub fn world_coords(&self, pt: &Point2<Real>) -> Point<Real> {
        self.centroid + self.basis[0] * pt.x + self.basis[1] * pt.y
    }
}

/// Fits a plane to a point cloud by principal-axis decomposition.
///
/// The plane passes through the centroid, with the normal given by the
/// eigenvector of the smallest eigenvalue of the centered covariance
/// matrix (the least-variance direction).
///
/// # Errors
/// Returns [`FitError::InsufficientPoints`] if fewer than 3 points are
/// given.
pub fn fit_plane(points: &[Point<Real>]) -> Result<PlaneFrame, FitError> {
    if points.len() < 3 {
        return Err(FitError::InsufficientPoints {
            needed: 3,
            found: points.len(),
        });
    }

    let (centroid, cov) = utils::center_cov(points);
    let eig = cov.symmetric_eigen();
    let smallest = eig.eigenvalues.imin();
    let normal = UnitVector::new_normalize(eig.eigenvectors.column(smallest).into_owned());
    let basis = utils::orthonormal_basis(&normal);

    Ok(PlaneFrame {
        normal,
        centroid,
        basis,
    })
}

#[cfg(test)]
mod test {
    use super::fit_plane;
    use crate::fitting::FitError;
    use crate::math::{Point, UnitVector, Vector};

    #[test]
    fn too_few_points() {
        let points = [Point::origin(), Point::new(1.0, 0.0, 0.0)];
        assert_eq!(
            fit_plane(&points),
            Err(FitError::InsufficientPoints {
                needed: 3,
                found: 2
            })
        );
    }

    #[test]
    fn exact_plane_is_recovered() {
        // Points on the plane x + 2y - z = 3.
        let expected = UnitVector::new_normalize(Vector::new(1.0, 2.0, -1.0));
        let points: Vec<_> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (2.0, -1.0), (0.3, 0.7)]
            .iter()
            .map(|&(x, y): &(f64, f64)| Point::new(x, y, x + 2.0 * y - 3.0))
            .collect();

        let frame = fit_plane(&points).unwrap();

        // Normal parallel to the expected one, up to sign.
        assert_relative_eq!(frame.normal.dot(&expected).abs(), 1.0, epsilon = 1.0e-9);

        // Zero residual: the points already lie on the plane.
        for pt in &points {
            assert_relative_eq!(frame.signed_distance(pt), 0.0, epsilon = 1.0e-9);
            assert_relative_eq!(frame.project(pt), *pt, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn plane_coords_round_trip() {
        let points = [
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 1.0, 1.0),
            Point::new(0.5, -0.5, 1.0),
        ];
        let frame = fit_plane(&points).unwrap();

        for pt in &points {
            let uv = frame.plane_coords(pt);
            assert_relative_eq!(frame.world_coords(&uv), *pt, epsilon = 1.0e-9);
        }
    }
}
