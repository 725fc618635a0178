//! A triangle mesh and its posed counterpart.

use crate::math::{Isometry, Point, Real};
use crate::shape::Triangle;

/// A triangle mesh described by a vertex buffer and an index buffer.
///
/// This is the mesh interface the geometric pipeline consumes: per-triangle
/// vertex indices and a vertex position array, both in the local frame of
/// the solid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// # Panics
    /// Panics if an index refers past the end of the vertex buffer.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> TriMesh {
        let nvtx = vertices.len() as u32;
        assert!(
            indices.iter().flatten().all(|i| *i < nvtx),
            "triangle index out of bounds"
        );
        TriMesh { vertices, indices }
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The `i`-th triangle of this mesh, in the local frame.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        let idx = self.indices[i];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator over the triangles of this mesh, in the local frame.
    #[inline]
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len()).map(move |i| self.triangle(i))
    }
}

/// A triangle mesh with a world-frame pose.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Solid {
    /// The mesh of this solid, in its local frame.
    pub mesh: TriMesh,
    /// The world-frame pose of this solid.
    pub position: Isometry<Real>,
}

impl Solid {
    /// Creates a solid from a mesh and its world-frame pose.
    pub fn new(mesh: TriMesh, position: Isometry<Real>) -> Solid {
        Solid { mesh, position }
    }

    /// Creates a solid from a mesh with an identity pose.
    pub fn from_mesh(mesh: TriMesh) -> Solid {
        Solid::new(mesh, Isometry::identity())
    }

    /// The `i`-th triangle of this solid, in the world frame.
    #[inline]
    pub fn world_triangle(&self, i: usize) -> Triangle {
        self.mesh.triangle(i).transformed(&self.position)
    }

    /// An iterator over the triangles of this solid, in the world frame.
    #[inline]
    pub fn world_triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.mesh
            .triangles()
            .map(move |tri| tri.transformed(&self.position))
    }

    /// An iterator over the vertices of this solid, in the world frame.
    #[inline]
    pub fn world_vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.mesh.vertices().iter().map(move |pt| self.position * pt)
    }
}
