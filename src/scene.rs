//! Conversion from millimeter geometry to render-scene units.
//!
//! The domain model works in millimeters throughout. This module is the only
//! place the fixed `1/1000` scene scale is applied.

use crate::mesh::MergedGeometry;

/// Scene units per millimeter.
pub const SCENE_UNITS_PER_MM: f64 = 1.0 / 1000.0;

/// Converts a millimeter length into scene units.
#[must_use]
pub fn to_scene_units(mm: f64) -> f64 {
    mm * SCENE_UNITS_PER_MM
}

/// Flat GPU-ready buffers in scene units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneMesh {
    /// Vertex positions (x, y, z).
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz).
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2).
    pub indices: Vec<u32>,
}

impl SceneMesh {
    /// Scales a millimeter geometry into scene units and flattens its buffers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_geometry(geometry: &MergedGeometry) -> Self {
        let mut mesh = Self {
            positions: Vec::with_capacity(geometry.vertices.len() * 3),
            normals: Vec::with_capacity(geometry.normals.len() * 3),
            indices: Vec::with_capacity(geometry.indices.len() * 3),
        };
        for p in &geometry.vertices {
            mesh.positions.extend(p.coords.iter().map(|&c| to_scene_units(c) as f32));
        }
        for n in &geometry.normals {
            mesh.normals.extend(n.iter().map(|&c| c as f32));
        }
        mesh.indices.extend(geometry.indices.iter().flatten().copied());
        mesh
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
