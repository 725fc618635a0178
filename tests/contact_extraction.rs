use approx::assert_relative_eq;
use contact_patch::fitting::{approximate_contact_shape, Conic};
use contact_patch::math::{Isometry, Point, Real};
use contact_patch::query::{intersection_points, BruteForceNarrowPhase};
use contact_patch::shape::{Solid, TriMesh};

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
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [2, 3, 7],
        [2, 7, 6],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];
    TriMesh::new(vertices, indices)
}

/// A square patch of half-extent `he` in the plane `z = z0`.
fn quad_patch(he: Real, z0: Real) -> TriMesh {
    let vertices = vec![
        Point::new(-he, -he, z0),
        Point::new(he, -he, z0),
        Point::new(he, he, z0),
        Point::new(-he, he, z0),
    ];
    let indices = vec![[0, 1, 2], [0, 2, 3]];
    TriMesh::new(vertices, indices)
}

#[test]
fn contained_patch_boundary_is_extracted_and_fitted() {
    // The affordance quad sits on the top face of the ROM cube, wholly
    // inside its volume: every quad vertex passes the containment filter
    // and the pairwise intersection stage contributes nothing new.
    let rom = Solid::from_mesh(unit_cube());
    let aff = Solid::from_mesh(quad_patch(0.4, 0.5));

    let points = intersection_points(&rom, &aff, &BruteForceNarrowPhase);

    // A 0.8-long square boundary resampled at most 0.1 apart.
    assert_eq!(points.len(), 32);
    for pt in &points {
        assert_relative_eq!(pt.z, 0.5, epsilon = 1.0e-9);
        assert!(pt.x.abs() <= 0.4 + 1.0e-9 && pt.y.abs() <= 0.4 + 1.0e-9);
    }
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        assert!((b - a).norm() <= 0.1 + 1.0e-9);
    }
    for corner in aff.world_vertices() {
        assert!(points.iter().any(|pt| (pt - corner).norm() < 1.0e-9));
    }

    // The fitted plane is the patch plane and the fitted conic roughly its
    // bounding circle.
    let (frame, conic) = approximate_contact_shape(&points).unwrap();
    assert_relative_eq!(frame.normal.z.abs(), 1.0, epsilon = 1.0e-9);

    let (center, bounds) = match conic {
        Conic::Circle { center, radius } => (center, [radius, radius]),
        Conic::Ellipse { center, radii, .. } => (center, radii),
    };
    assert_relative_eq!(center.x, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(center.y, 0.0, epsilon = 1.0e-6);
    for radius in bounds {
        assert!(
            radius > 0.3 && radius < 0.4 * std::f64::consts::SQRT_2 + 1.0e-6,
            "radius = {}",
            radius
        );
    }
}

#[test]
fn disjoint_solids_yield_a_valid_empty_result() {
    let rom = Solid::from_mesh(unit_cube());
    let aff = Solid::from_mesh(quad_patch(0.4, 5.0));

    assert!(intersection_points(&rom, &aff, &BruteForceNarrowPhase).is_empty());
}

#[test]
fn overlapping_cubes_boundary_stays_in_the_overlap() {
    let rom = Solid::from_mesh(unit_cube());
    let aff = Solid::new(unit_cube(), Isometry::translation(0.45, 0.0, 0.0));

    let points = intersection_points(&rom, &aff, &BruteForceNarrowPhase);
    assert!(!points.is_empty());

    // Every boundary point lies in the (convex) overlap of the two cubes.
    for pt in &points {
        assert!(pt.x >= -0.05 - 1.0e-6 && pt.x <= 0.5 + 1.0e-6, "x = {}", pt.x);
        assert!(pt.y.abs() <= 0.5 + 1.0e-6);
        assert!(pt.z.abs() <= 0.5 + 1.0e-6);
    }
}
