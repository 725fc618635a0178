//! Direct least-squares conic fitting and parameter recovery.

use crate::fitting::FitError;
use crate::math::{Real, EPS};
use na::{self, Matrix2, Matrix3, Point2, Vector2, Vector3};
use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI};

/// A recovered conic, restricted to the two shapes a contact region can
/// take.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conic {
    /// A circle.
    Circle {
        /// The center, in the same planar frame as the fitted points.
        center: Point2<Real>,
        /// The radius.
        radius: Real,
    },
    /// An ellipse.
    Ellipse {
        /// The center, in the same planar frame as the fitted points.
        center: Point2<Real>,
        /// The two radii, major first.
        radii: [Real; 2],
        /// The rotation of the major axis from the x-axis, in
        /// `(-π/2, π/2]`.
        angle: Real,
    },
}

/// Fits an ellipse to a 2D point set by direct least squares.
///
/// This is the direct ellipse fit of Fitzgibbon, Pilu and Fisher ("Direct
/// Least Squares Fitting of Ellipses", IEEE Trans. PAMI 21, 1999), in the
/// numerically stable reduced form of Halíř and Flusser. It returns
/// ellipses only, even when the points are better approximated by a
/// hyperbola, and is somewhat biased toward smaller ellipses.
///
/// The six returned coefficients `(A, B, C, D, E, F)` of
/// `Ax² + Bxy + Cy² + Dx + Ey + F = 0` are normalized to unit norm.
///
/// # Errors
/// - [`FitError::InsufficientPoints`] with fewer than 5 points;
/// - [`FitError::NoValidEllipse`] when no eigenvector of the reduced
///   scatter system satisfies the ellipse discriminant `4AC - B² > 0`
///   (the caller may retry with [`fit_circle`]).
pub fn fit_ellipse(points: &[Point2<Real>]) -> Result<[Real; 6], FitError> {
    if points.len() < 5 {
        return Err(FitError::InsufficientPoints {
            needed: 5,
            found: points.len(),
        });
    }

    // Working relative to the centroid improves the conditioning of the
    // scatter matrices.
    let mut centroid = Vector2::zeros();
    for pt in points {
        centroid += pt.coords;
    }
    centroid /= points.len() as Real;

    let mut s1 = Matrix3::zeros();
    let mut s2 = Matrix3::zeros();
    let mut s3 = Matrix3::zeros();
    for pt in points {
        let x = pt.x - centroid.x;
        let y = pt.y - centroid.y;
        let quad = Vector3::new(x * x, x * y, y * y);
        let lin = Vector3::new(x, y, 1.0);
        s1 += quad * quad.transpose();
        s2 += quad * lin.transpose();
        s3 += lin * lin.transpose();
    }

    let s3_inv = s3.try_inverse().ok_or(FitError::NoValidEllipse)?;
    let t = -s3_inv * s2.transpose();
    let reduced = s1 + s2 * t;
    // Reduced scatter premultiplied by the inverse of the ellipse
    // constraint matrix.
    let m = Matrix3::from_rows(&[
        reduced.row(2) / 2.0,
        -reduced.row(1),
        reduced.row(0) / 2.0,
    ]);

    let quad = ellipse_eigenvector(&m).ok_or(FitError::NoValidEllipse)?;
    let lin = t * quad;

    // Move the linear and constant coefficients back to the original
    // (non-centered) coordinate frame.
    let (cx, cy) = (centroid.x, centroid.y);
    let (a, b, c) = (quad.x, quad.y, quad.z);
    let d = lin.x - 2.0 * a * cx - b * cy;
    let e = lin.y - 2.0 * c * cy - b * cx;
    let f = lin.z + a * cx * cx + c * cy * cy + b * cx * cy - lin.x * cx - lin.y * cy;

    Ok(normalized([a, b, c, d, e, f]))
}

/// Fits a circle to a 2D point set: the center is the centroid and the
/// radius the mean distance to it.
///
/// Always succeeds given at least one point, but degenerates gracefully:
/// collinear or repeated points yield a circle of near-zero radius, which
/// the caller must validate.
///
/// The returned coefficients follow the same `(A, B, C, D, E, F)`
/// convention as [`fit_ellipse`], with `B = 0` marking the circle case.
///
/// # Errors
/// Returns [`FitError::InsufficientPoints`] on an empty input.
pub fn fit_circle(points: &[Point2<Real>]) -> Result<[Real; 6], FitError> {
    if points.is_empty() {
        return Err(FitError::InsufficientPoints {
            needed: 1,
            found: 0,
        });
    }

    let n = points.len() as Real;
    let mut centroid = Vector2::zeros();
    for pt in points {
        centroid += pt.coords;
    }
    centroid /= n;

    let radius = points
        .iter()
        .map(|pt| (pt.coords - centroid).norm())
        .sum::<Real>()
        / n;

    Ok(normalized([
        1.0,
        0.0,
        1.0,
        -2.0 * centroid.x,
        -2.0 * centroid.y,
        centroid.norm_squared() - radius * radius,
    ]))
}

/// Fits a conic to a 2D point set, preferring an ellipse and falling back
/// to a circle when the direct ellipse fit fails or degenerates.
pub fn fit_conic(points: &[Point2<Real>]) -> Result<Conic, FitError> {
    match fit_ellipse(points).and_then(|coeffs| recover_conic(&coeffs)) {
        Ok(conic) => Ok(conic),
        Err(err) => {
            log::debug!("ellipse fit failed ({err}); retrying with a circle fit");
            recover_conic(&fit_circle(points)?)
        }
    }
}

/// Recovers the geometric shape described by six conic coefficients
/// `(A, B, C, D, E, F)`.
///
/// `B == 0` is the circle special case; otherwise the coefficients are
/// interpreted as an ellipse: the radii come from the determinant ratio of
/// the 3×3 and 2×2 coefficient matrices, with the eigenvalues of the
/// latter matched to `(A, C)` by closeness to disambiguate their order.
///
/// The recovery is invariant under a global scaling of the coefficients,
/// so normalized and unnormalized vectors are both accepted.
///
/// # Errors
/// - [`FitError::InvalidParameterCount`] unless exactly 6 coefficients
///   are given;
/// - [`FitError::DegenerateConic`] when the coefficients do not describe
///   a real circle or ellipse.
pub fn recover_conic(params: &[Real]) -> Result<Conic, FitError> {
    let [a, b, c, d, e, f] = <[Real; 6]>::try_from(params)
        .map_err(|_| FitError::InvalidParameterCount(params.len()))?;

    if b == 0.0 {
        // Degeneracy must be judged relative to the quadratic coefficient
        // scale: after unit-norm normalization a circle far from the
        // origin has a tiny A, since F grows with the squared center norm.
        if a.abs() <= EPS * a.abs().max(c.abs()) {
            return Err(FitError::DegenerateConic);
        }
        let center = Point2::new(-d / (2.0 * a), -e / (2.0 * a));
        let radicand = center.coords.norm_squared() - f / a;
        if radicand < 0.0 {
            return Err(FitError::DegenerateConic);
        }
        return Ok(Conic::Circle {
            center,
            radius: radicand.sqrt(),
        });
    }

    let disc = 4.0 * a * c - b * b;
    if disc <= 0.0 {
        // Not an ellipse (parabolic or hyperbolic coefficients).
        return Err(FitError::DegenerateConic);
    }

    #[rustfmt::skip]
    let m0 = Matrix3::new(
        f,       d / 2.0, e / 2.0,
        d / 2.0, a,       b / 2.0,
        e / 2.0, b / 2.0, c,
    );
    let m = Matrix2::new(a, b / 2.0, b / 2.0, c);

    let eig = m.symmetric_eigen();
    let (ev0, ev1) = (eig.eigenvalues.x, eig.eigenvalues.y);
    // Match the eigenvalues to (A, C) by closeness so the first radius
    // goes with the axis closest to x.
    let (l0, l1) = if (ev0 - a).abs() > (ev0 - c).abs() {
        (ev1, ev0)
    } else {
        (ev0, ev1)
    };

    let ratio = -m0.determinant() / m.determinant();
    let (sq0, sq1) = (ratio / l0, ratio / l1);
    if sq0 <= 0.0 || sq1 <= 0.0 {
        return Err(FitError::DegenerateConic);
    }
    let (mut r0, mut r1) = (sq0.sqrt(), sq1.sqrt());

    let center = Point2::new((b * e - 2.0 * c * d) / disc, (b * d - 2.0 * a * e) / disc);

    // The rotation within the plane; shifted by -π/2 whenever the first
    // radius is the minor one, so that the returned angle is always the
    // one carrying the longer axis onto x.
    let mut angle = (b / (a - c)).atan() / 2.0;
    if r0 < r1 {
        std::mem::swap(&mut r0, &mut r1);
        angle -= FRAC_PI_2;
    }
    if angle <= -FRAC_PI_2 {
        angle += PI;
    }

    Ok(Conic::Ellipse {
        center,
        radii: [r0, r1],
        angle,
    })
}

fn normalized(mut coeffs: [Real; 6]) -> [Real; 6] {
    let norm = coeffs.iter().map(|v| v * v).sum::<Real>().sqrt();
    for v in &mut coeffs {
        *v /= norm;
    }
    coeffs
}

/// A real eigenvector of `m` satisfying the ellipse discriminant
/// `4AC - B² > 0`, if any.
fn ellipse_eigenvector(m: &Matrix3<Real>) -> Option<Vector3<Real>> {
    for ev in m.complex_eigenvalues().iter() {
        if ev.im.abs() > EPS * (1.0 + ev.re.abs()) {
            continue;
        }
        if let Some(vec) = unit_nullvector(&(m - Matrix3::identity() * ev.re)) {
            if 4.0 * vec.x * vec.z - vec.y * vec.y > 0.0 {
                return Some(vec);
            }
        }
    }
    None
}

/// A unit vector spanning the (assumed one-dimensional) nullspace of `m`,
/// taken as the largest cross product of two of its rows.
fn unit_nullvector(m: &Matrix3<Real>) -> Option<Vector3<Real>> {
    let r0 = m.row(0).transpose();
    let r1 = m.row(1).transpose();
    let r2 = m.row(2).transpose();
    let candidates = [r0.cross(&r1), r0.cross(&r2), r1.cross(&r2)];

    candidates
        .iter()
        .max_by(|lhs, rhs| {
            lhs.norm_squared()
                .partial_cmp(&rhs.norm_squared())
                .unwrap_or(Ordering::Equal)
        })
        .and_then(|best| na::Unit::try_new(*best, EPS).map(|unit| unit.into_inner()))
}
