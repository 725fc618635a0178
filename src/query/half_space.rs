//! Containment test of a solid as a system of face inequalities.

use crate::math::{Point, Real};
use crate::shape::{HalfSpace, Solid};

/// The face inequalities of a closed triangulated solid.
///
/// Each mesh face contributes one half-space whose boundary supports the
/// face, with the normal given by the face winding. A point is inside the
/// solid iff it satisfies every inequality simultaneously.
///
/// This test is exact for convex solids. For non-convex bodies it is an
/// over-approximation (over-inclusive), which is acceptable as long as the
/// system is used as a pre-filter before geometric intersection and never
/// as the sole criterion.
#[derive(Clone, Debug)]
pub struct HalfSpaceSystem {
    faces: Vec<HalfSpace>,
}

impl HalfSpaceSystem {
    /// Builds the face inequalities of `solid`, in the world frame.
    ///
    /// Degenerate faces (with a near-zero normal) contribute a trivially
    /// satisfied inequality and are skipped.
    pub fn from_solid(solid: &Solid) -> HalfSpaceSystem {
        let faces = solid
            .world_triangles()
            .filter_map(|tri| {
                tri.normal()
                    .map(|normal| HalfSpace::new(normal.into_inner(), tri.a))
            })
            .collect();
        HalfSpaceSystem { faces }
    }

    /// The number of face inequalities of this system.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether this system has no face inequality at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Tests whether `pt` satisfies all the face inequalities.
    ///
    /// Points lying on a boundary plane count as inside.
    pub fn contains(&self, pt: &Point<Real>) -> bool {
        self.faces.iter().all(|face| face.contains(pt))
    }
}

#[cfg(test)]
mod test {
    use super::HalfSpaceSystem;
    use crate::math::{Isometry, Point};
    use crate::shape::{Solid, TriMesh};

    fn unit_cube() -> TriMesh {
        let vertices = vec![
            Point::new(-0.5, -0.5, -0.5),
            Point::new(0.5, -0.5, -0.5),
            Point::new(0.5, 0.5, -0.5),
            Point::new(-0.5, 0.5, -0.5),
            Point::new(-0.5, -0.5, 0.5),
            Point::new(0.5, -0.5, 0.5),
            Point::new(0.5, 0.5, 0.5),
            Point::new(-0.5, 0.5, 0.5),
        ];
        let indices = vec![
            // -z
            [0, 2, 1],
            [0, 3, 2],
            // +z
            [4, 5, 6],
            [4, 6, 7],
            // -y
            [0, 1, 5],
            [0, 5, 4],
            // +y
            [2, 3, 7],
            [2, 7, 6],
            // -x
            [0, 4, 7],
            [0, 7, 3],
            // +x
            [1, 2, 6],
            [1, 6, 5],
        ];
        TriMesh::new(vertices, indices)
    }

    #[test]
    fn cube_contains_interior_and_boundary_points() {
        let system = HalfSpaceSystem::from_solid(&Solid::from_mesh(unit_cube()));
        assert_eq!(system.len(), 12);

        assert!(system.contains(&Point::origin()));
        assert!(system.contains(&Point::new(0.3, -0.2, 0.45)));
        // On a face, an edge and a corner.
        assert!(system.contains(&Point::new(0.0, 0.0, 0.5)));
        assert!(system.contains(&Point::new(0.5, 0.5, 0.0)));
        assert!(system.contains(&Point::new(0.5, 0.5, 0.5)));

        assert!(!system.contains(&Point::new(0.0, 0.0, 0.6)));
        assert!(!system.contains(&Point::new(-0.7, 0.0, 0.0)));
        assert!(!system.contains(&Point::new(10.0, 10.0, 10.0)));
    }

    #[test]
    fn posed_cube_follows_its_pose() {
        let pos = Isometry::translation(10.0, 0.0, 0.0);
        let system = HalfSpaceSystem::from_solid(&Solid::new(unit_cube(), pos));

        assert!(system.contains(&Point::new(10.0, 0.0, 0.0)));
        assert!(system.contains(&Point::new(10.4, 0.3, -0.3)));
        assert!(!system.contains(&Point::origin()));
    }
}
