//! The seam toward an external narrow-phase collision test.

use crate::math::{Point, Real};
use crate::query::triangle_triangle_intersection;
use crate::shape::Solid;

/// The default cap on the number of contact points reported by
/// [`NarrowPhase::contact_points`].
pub const DEFAULT_MAX_CONTACTS: usize = 100;

/// A narrow-phase collision test between two posed solids.
///
/// The contact-region extractor only needs a boolean "are these two solids
/// touching" answer; it is usually supplied by the collision library that
/// already performed broad/narrow-phase filtering upstream. Implement this
/// trait to plug that library in, or use [`BruteForceNarrowPhase`] to stay
/// self-contained.
pub trait NarrowPhase {
    /// Tests whether `rom` and `aff` are colliding (touching or
    /// overlapping).
    fn is_colliding(&self, rom: &Solid, aff: &Solid) -> bool;

    /// Up to `max_contacts` contact points between `rom` and `aff`, in the
    /// world frame.
    ///
    /// This is an optional capability: implementations without contact
    /// points may keep the default, which reports none. The extractor does
    /// not rely on it.
    fn contact_points(&self, rom: &Solid, aff: &Solid, max_contacts: usize) -> Vec<Point<Real>> {
        let _ = (rom, aff, max_contacts);
        Vec::new()
    }
}

/// A self-contained narrow phase testing every triangle pair.
///
/// Quadratic in the number of triangles; meant for tests and small meshes.
/// Coplanar triangle pairs count as touching.
#[derive(Default, Clone, Copy, Debug)]
pub struct BruteForceNarrowPhase;

impl NarrowPhase for BruteForceNarrowPhase {
    fn is_colliding(&self, rom: &Solid, aff: &Solid) -> bool {
        let rom_tris: Vec<_> = rom.world_triangles().collect();
        aff.world_triangles().any(|aff_tri| {
            rom_tris.iter().any(|rom_tri| {
                !matches!(
                    triangle_triangle_intersection(&aff_tri, rom_tri),
                    Ok(None)
                )
            })
        })
    }

    fn contact_points(&self, rom: &Solid, aff: &Solid, max_contacts: usize) -> Vec<Point<Real>> {
        let rom_tris: Vec<_> = rom.world_triangles().collect();
        let mut points = Vec::new();

        'outer: for aff_tri in aff.world_triangles() {
            for rom_tri in &rom_tris {
                if let Ok(Some(seg)) = triangle_triangle_intersection(&aff_tri, rom_tri) {
                    points.push(seg.a);
                    points.push(seg.b);
                    if points.len() >= max_contacts {
                        points.truncate(max_contacts);
                        break 'outer;
                    }
                }
            }
        }

        points
    }
}
