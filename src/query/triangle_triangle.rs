//! Intersection segment between two triangles.

use crate::math::{Point, Real, Vector, EPS};
use crate::shape::{PlaneEquation, Segment, Triangle};
use na;

/// Error raised when an intersection query hits a configuration it does
/// not handle: a (nearly) coplanar triangle pair.
///
/// The segment bounding the intersection of two coplanar triangles is not
/// defined; extracting their overlap would require 2D polygon clipping,
/// which is out of the scope of this query. Callers that only accumulate
/// boundary points may simply skip such pairs.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("the triangles are (nearly) coplanar")]
pub struct DegenerateGeometry;

/// Computes the segment bounding the intersection of two triangles.
///
/// Follows Möller's interval-overlap test: each triangle is checked
/// against the supporting plane of the other, and the two crossing
/// intervals along the plane-plane intersection line are intersected.
///
/// Returns `Ok(None)` if the triangles do not intersect, and
/// `Ok(Some(segment))` otherwise. The segment may be degenerate (equal
/// endpoints) when the triangles only touch at a point.
///
/// # Errors
/// Returns [`DegenerateGeometry`] when the triangles are coplanar within
/// [`EPS`].
pub fn triangle_triangle_intersection(
    tri1: &Triangle,
    tri2: &Triangle,
) -> Result<Option<Segment>, DegenerateGeometry> {
    let plane1 = tri1.plane();
    let dist2 = plane1.signed_distances(tri2);

    // All vertices of `tri2` strictly on one side of the plane of `tri1`.
    if same_strict_sign(&dist2) {
        return Ok(None);
    }

    let plane2 = tri2.plane();
    let dist1 = plane2.signed_distances(tri1);

    if same_strict_sign(&dist1) {
        return Ok(None);
    }

    if all_zero(&dist1) || all_zero(&dist2) {
        return Err(DegenerateGeometry);
    }

    // The planes cross in a line `L(t) = origin + t * dir`.
    let dir = match na::Unit::try_new(plane2.normal.cross(&plane1.normal), EPS) {
        Some(dir) => dir.into_inner(),
        // Parallel but distinct planes: the strict-sign tests above did not
        // reject only because some vertices touch a plane without crossing
        // it. There is no segment to extract.
        None => return Ok(None),
    };
    let origin = point_on_intersection_line(&plane1, &plane2, &dir);

    let (min1, max1) = crossing_interval(tri1, &dist1, &origin, &dir);
    let (min2, max2) = crossing_interval(tri2, &dist2, &origin, &dir);

    let t1 = min1.max(min2);
    let t2 = max1.min(max2);

    if t1 > t2 {
        // Both triangles cross the line, but on disjoint intervals.
        return Ok(None);
    }

    Ok(Some(Segment::new(origin + dir * t1, origin + dir * t2)))
}

fn same_strict_sign(dist: &[Real; 3]) -> bool {
    (dist[0] < 0.0 && dist[1] < 0.0 && dist[2] < 0.0)
        || (dist[0] > 0.0 && dist[1] > 0.0 && dist[2] > 0.0)
}

// Distances are snapped to zero by `PlaneEquation::signed_distances`, so
// exact comparisons are fine here.
fn all_zero(dist: &[Real; 3]) -> bool {
    dist[0] == 0.0 && dist[1] == 0.0 && dist[2] == 0.0
}

/// Computes a point lying on both planes.
///
/// The 2×2 linear system obtained by zeroing one coordinate is solved for
/// the two remaining ones. The zeroed coordinate is the one where `dir` is
/// largest, which keeps the system determinant (a component of the
/// normals' cross product) as far from zero as possible.
fn point_on_intersection_line(
    plane1: &PlaneEquation,
    plane2: &PlaneEquation,
    dir: &Vector<Real>,
) -> Point<Real> {
    let n1 = &plane1.normal;
    let n2 = &plane2.normal;
    let d1 = plane1.d;
    let d2 = plane2.d;

    match dir.iamax() {
        0 => {
            let det = n1.y * n2.z - n1.z * n2.y;
            Point::new(
                0.0,
                (-d1 * n2.z + d2 * n1.z) / det,
                (-d2 * n1.y + d1 * n2.y) / det,
            )
        }
        1 => {
            let det = n1.z * n2.x - n1.x * n2.z;
            Point::new(
                (-d2 * n1.z + d1 * n2.z) / det,
                0.0,
                (-d1 * n2.x + d2 * n1.x) / det,
            )
        }
        _ => {
            let det = n1.x * n2.y - n1.y * n2.x;
            Point::new(
                (-d1 * n2.y + d2 * n1.y) / det,
                (-d2 * n1.x + d1 * n2.x) / det,
                0.0,
            )
        }
    }
}

/// Computes the interval along `L(t) = origin + t * dir` on which the
/// triangle crosses the plane that produced the signed distances `dist`.
///
/// The three vertices are relabeled so that the vertex whose sign differs
/// from the other two (the apex) is isolated; the interval endpoints are
/// then found by interpolating along the two edges reaching the apex,
/// weighted by signed distance.
fn crossing_interval(
    tri: &Triangle,
    dist: &[Real; 3],
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> (Real, Real) {
    let pts = tri.vertices();
    let t = [
        dir.dot(&(pts[0] - origin)),
        dir.dot(&(pts[1] - origin)),
        dir.dot(&(pts[2] - origin)),
    ];

    // Vertex relabeling, zero distances landing on either side.
    let (i0, i1, apex) = if dist[0] * dist[1] > 0.0 {
        (0, 1, 2)
    } else if dist[0] * dist[2] > 0.0 {
        (0, 2, 1)
    } else if dist[1] * dist[2] > 0.0 || dist[0] != 0.0 {
        (1, 2, 0)
    } else if dist[1] != 0.0 {
        (0, 2, 1)
    } else {
        // dist[2] != 0.0; the caller already excluded the all-zero case.
        (0, 1, 2)
    };

    let ta = interp(t[i0], t[apex], dist[i0], dist[apex]);
    let tb = interp(t[i1], t[apex], dist[i1], dist[apex]);

    (ta.min(tb), ta.max(tb))
}

// Parameter of the plane crossing along the edge going from a vertex with
// distance `d0` to the apex with distance `d1`.
fn interp(t0: Real, t1: Real, d0: Real, d1: Real) -> Real {
    t0 + (t1 - t0) * d0 / (d0 - d1)
}
