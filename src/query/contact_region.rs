//! Extraction of the contact region between two posed solids.

use crate::math::{Point, Real};
use crate::query::{triangle_triangle_intersection, HalfSpaceSystem, NarrowPhase};
use crate::shape::{Solid, Triangle};
use crate::transformation::{planar_convex_hull, refine_boundary};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the boundary of the contact region between a range-of-motion
/// volume and an affordance surface patch.
///
/// The returned points bound the overlapping area, in the world frame,
/// resampled so that no two consecutive boundary points are farther apart
/// than the smallest non-degenerate boundary edge (capped at 0.1 length
/// units). They are meant to be fed to
/// [`crate::fitting::approximate_contact_shape`].
///
/// An empty result is a legitimate outcome (the solids do not overlap),
/// reported as such, never as an error. Coplanar triangle pairs are
/// skipped: they can only duplicate boundary points already contributed by
/// the containment pre-filter and the neighboring pairs.
pub fn intersection_points<N: NarrowPhase + ?Sized>(
    rom: &Solid,
    aff: &Solid,
    narrow_phase: &N,
) -> Vec<Point<Real>> {
    let rom_tris: Vec<Triangle> = rom.world_triangles().collect();
    let aff_tris: Vec<Triangle> = aff.world_triangles().collect();

    // Affordance vertices wholly contained in the ROM volume. Without this
    // pre-filter, a patch entirely inside the volume would yield no
    // boundary point at all.
    let system = HalfSpaceSystem::from_solid(rom);
    let mut points: Vec<Point<Real>> = aff
        .world_vertices()
        .filter(|pt| system.contains(pt))
        .collect();

    if points.is_empty() && !narrow_phase.is_colliding(rom, aff) {
        log::info!("affordance patch is out of reach of the ROM volume; no intersection");
        return Vec::new();
    }

    points.extend(pairwise_intersection_points(&aff_tris, &rom_tris));

    if points.len() < 3 {
        return points;
    }

    match planar_convex_hull(&points) {
        Ok(hull) if hull.len() >= 3 => refine_boundary(&hull),
        Ok(_) => {
            log::warn!("contact region is degenerate (collinear); returning raw points");
            points
        }
        Err(err) => {
            log::warn!("contact region boundary extraction failed ({err}); returning raw points");
            points
        }
    }
}

/// The endpoints of all pairwise triangle-triangle intersection segments.
///
/// Each pair is independent and side-effect-free, so with the `parallel`
/// feature the loop runs as a parallel flat-map; only the membership of
/// the resulting set is significant, not its order.
fn pairwise_intersection_points(
    aff_tris: &[Triangle],
    rom_tris: &[Triangle],
) -> Vec<Point<Real>> {
    let per_triangle = |aff_tri: &Triangle| {
        let mut out = Vec::new();
        for rom_tri in rom_tris {
            match triangle_triangle_intersection(aff_tri, rom_tri) {
                Ok(Some(seg)) => {
                    out.push(seg.a);
                    out.push(seg.b);
                }
                Ok(None) => {}
                Err(_) => log::debug!("skipping coplanar triangle pair"),
            }
        }
        out
    };

    #[cfg(feature = "parallel")]
    {
        aff_tris.par_iter().flat_map_iter(per_triangle).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        aff_tris.iter().flat_map(per_triangle).collect()
    }
}
