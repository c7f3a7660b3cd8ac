mod bounding_box;

pub use bounding_box::Aabb;

use crate::math::{Isometry3, Point3, Vector3};

/// A single indexed triangle buffer assembled from one or more solids.
///
/// Vertices are not shared between faces, so every face keeps a flat normal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedGeometry {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, one per vertex.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl MergedGeometry {
    /// Creates an empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty geometry with room for the given vertex and triangle counts.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends a vertex and returns its index.
    pub(crate) fn push_vertex(&mut self, position: Point3, normal: Vector3) -> u32 {
        let index = index_u32(self.vertices.len());
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Appends a planar quad `a b c d` (counter-clockwise seen from `normal`).
    pub(crate) fn push_quad(&mut self, corners: [Point3; 4], normal: Vector3) {
        let base = self.push_vertex(corners[0], normal);
        for &corner in &corners[1..] {
            self.push_vertex(corner, normal);
        }
        self.indices.push([base, base + 1, base + 2]);
        self.indices.push([base, base + 2, base + 3]);
    }

    /// Appends another geometry, rebasing its indices onto this buffer.
    pub fn merge(&mut self, other: &MergedGeometry) {
        let offset = index_u32(self.vertices.len());
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Returns a copy with every vertex and normal moved by `pose`.
    #[must_use]
    pub fn transformed(&self, pose: &Isometry3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| pose * p).collect(),
            normals: self.normals.iter().map(|n| pose * n).collect(),
            indices: self.indices.clone(),
        }
    }

    /// Axis-aligned bounds of all vertices, or `None` when empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn index_u32(len: usize) -> u32 {
    debug_assert!(u32::try_from(len).is_ok(), "vertex buffer exceeds u32 indices");
    len as u32
}
