//! Convex hull and boundary resampling of a near-coplanar 3D point cloud.

use crate::fitting::{fit_plane, FitError};
use crate::math::{Point, Real, EPS};
use na::Point2;
use std::cmp::Ordering;

/// The largest admissible spacing between two consecutive points of a
/// refined boundary, used as the initial candidate when looking for the
/// smallest hull edge.
const MAX_REFINED_SPACING: Real = 0.1;

/// Computes the convex hull of a point cloud assumed near-coplanar.
///
/// The points are projected onto their best-fit plane and the hull is
/// taken in plane coordinates (monotone chain); the returned loop contains
/// the original (unprojected) 3D points of the hull vertices, ordered
/// counter-clockwise around the plane normal.
///
/// Collinear configurations yield a loop of fewer than 3 points.
///
/// # Errors
/// Returns [`FitError::InsufficientPoints`] if fewer than 3 points are
/// given (the plane fit is underdetermined).
pub fn planar_convex_hull(points: &[Point<Real>]) -> Result<Vec<Point<Real>>, FitError> {
    let frame = fit_plane(points)?;
    let projected: Vec<Point2<Real>> = points.iter().map(|pt| frame.plane_coords(pt)).collect();

    let hull_ids = convex_hull2_idx(&projected);
    Ok(hull_ids.into_iter().map(|i| points[i]).collect())
}

/// Resamples a closed boundary loop so consecutive points are at most one
/// minimum-edge-length apart.
///
/// The target spacing is the length of the smallest non-degenerate edge
/// (edges shorter than [`EPS`] are ignored), starting from a fixed
/// candidate of 0.1 length units; every edge is then subdivided into
/// `ceil(length / spacing)` equal segments. Each input vertex is kept, so
/// the refined loop covers the original one.
pub fn refine_boundary(hull: &[Point<Real>]) -> Vec<Point<Real>> {
    if hull.len() < 2 {
        return hull.to_vec();
    }

    let edges = || {
        hull.iter()
            .zip(hull.iter().cycle().skip(1))
            .map(|(a, b)| (*a, *b))
    };

    let mut spacing = MAX_REFINED_SPACING;
    for (a, b) in edges() {
        let length = (b - a).norm();
        if length > EPS && length < spacing {
            spacing = length;
        }
    }

    let mut refined = Vec::new();
    for (a, b) in edges() {
        let length = (b - a).norm();
        if length <= EPS {
            continue;
        }

        let nsub = (length / spacing).ceil() as usize;
        for k in 0..nsub {
            refined.push(a + (b - a) * (k as Real / nsub as Real));
        }
    }

    refined
}

/// Computes the indices of the counter-clockwise convex hull of a 2D point
/// cloud, by monotone chain.
///
/// Collinear and duplicate points are left out of the hull.
fn convex_hull2_idx(points: &[Point2<Real>]) -> Vec<usize> {
    let mut ids: Vec<usize> = (0..points.len()).collect();
    ids.sort_by(|&i, &j| {
        (points[i].x, points[i].y)
            .partial_cmp(&(points[j].x, points[j].y))
            .unwrap_or(Ordering::Equal)
    });

    let cross = |o: usize, a: usize, b: usize| -> Real {
        let oa = points[a] - points[o];
        let ob = points[b] - points[o];
        oa.x * ob.y - oa.y * ob.x
    };

    let mut hull: Vec<usize> = Vec::with_capacity(ids.len() + 1);

    // Lower hull, then upper hull.
    for &id in &ids {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], id) <= EPS {
            let _ = hull.pop();
        }
        hull.push(id);
    }

    let lower_len = hull.len() + 1;
    for &id in ids.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], id) <= EPS
        {
            let _ = hull.pop();
        }
        hull.push(id);
    }

    // Both chains end on their starting point.
    let _ = hull.pop();
    hull
}
