use crate::math::{Matrix, Point, Real};
use crate::num::FromPrimitive;
use na;

/// Computes the center and the covariance matrix of a set of points.
pub fn center_cov(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>) {
    let center = crate::utils::center(pts);
    let mut cov: Matrix<Real> = na::zero();
    let normalizer: Real = 1.0 / Real::from_usize(pts.len()).unwrap();

    for p in pts.iter() {
        let cp = *p - center;
        cov += cp * (cp * normalizer).transpose();
    }

    (center, cov)
}
