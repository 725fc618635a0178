//! Least-squares plane and conic fitting of contact-region point clouds.

pub use self::conic::{fit_circle, fit_conic, fit_ellipse, recover_conic, Conic};
pub use self::error::FitError;
pub use self::plane::{fit_plane, PlaneFrame};

mod conic;
mod error;
mod plane;

use crate::math::{Point, Real};

/// Fits a plane to a 3D point cloud and a conic to its in-plane
/// projection.
///
/// This is the usual way of consuming the point cloud produced by
/// [`crate::query::intersection_points`]: the returned frame maps the
/// conic (expressed in plane coordinates) back to the world.
///
/// # Errors
/// Propagates the underlying [`fit_plane`] and [`fit_conic`] failures.
pub fn approximate_contact_shape(
    points: &[Point<Real>],
) -> Result<(PlaneFrame, Conic), FitError> {
    let frame = fit_plane(points)?;
    let projected: Vec<_> = points.iter().map(|pt| frame.plane_coords(pt)).collect();
    let conic = fit_conic(&projected)?;
    Ok((frame, conic))
}
