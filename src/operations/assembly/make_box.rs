use crate::error::{GeometryError, Result};
use crate::math::{Isometry3, Point3, Vector3, TOLERANCE};
use crate::mesh::MergedGeometry;

/// An oriented box: local corners placed by a rigid pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    min_corner: Point3,
    max_corner: Point3,
    pose: Isometry3,
}

impl BoxSpec {
    /// Creates an axis-aligned box from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min_corner: a.inf(&b),
            max_corner: a.sup(&b),
            pose: Isometry3::identity(),
        }
    }

    /// Places the box with `pose`, applied after any previous pose.
    #[must_use]
    pub fn with_pose(mut self, pose: Isometry3) -> Self {
        self.pose = pose * self.pose;
        self
    }

    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max_corner - self.min_corner
    }

    #[must_use]
    pub fn min_corner(&self) -> Point3 {
        self.min_corner
    }

    #[must_use]
    pub fn max_corner(&self) -> Point3 {
        self.max_corner
    }

    /// Appends the box's six faces to `mesh`: 24 vertices, 12 triangles.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for a non-finite corner and
    /// [`GeometryError::Degenerate`] if any extent is not positive.
    pub(crate) fn append_to(&self, mesh: &mut MergedGeometry) -> Result<()> {
        for (parameter, value) in [
            ("min_corner", self.min_corner.coords.sum()),
            ("max_corner", self.max_corner.coords.sum()),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { parameter, value }.into());
            }
        }
        let size = self.size();
        if size.min() <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "box extent {}x{}x{} is not positive",
                size.x, size.y, size.z
            ))
            .into());
        }

        let (lo, hi) = (self.min_corner, self.max_corner);
        let corner = |x: f64, y: f64, z: f64| self.pose * Point3::new(x, y, z);
        let faces = [
            // -X
            ([(lo.x, lo.y, lo.z), (lo.x, lo.y, hi.z), (lo.x, hi.y, hi.z), (lo.x, hi.y, lo.z)], -Vector3::x()),
            // +X
            ([(hi.x, lo.y, hi.z), (hi.x, lo.y, lo.z), (hi.x, hi.y, lo.z), (hi.x, hi.y, hi.z)], Vector3::x()),
            // -Y
            ([(lo.x, lo.y, lo.z), (hi.x, lo.y, lo.z), (hi.x, lo.y, hi.z), (lo.x, lo.y, hi.z)], -Vector3::y()),
            // +Y
            ([(lo.x, hi.y, hi.z), (hi.x, hi.y, hi.z), (hi.x, hi.y, lo.z), (lo.x, hi.y, lo.z)], Vector3::y()),
            // -Z
            ([(hi.x, lo.y, lo.z), (lo.x, lo.y, lo.z), (lo.x, hi.y, lo.z), (hi.x, hi.y, lo.z)], -Vector3::z()),
            // +Z
            ([(lo.x, lo.y, hi.z), (hi.x, lo.y, hi.z), (hi.x, hi.y, hi.z), (lo.x, hi.y, hi.z)], Vector3::z()),
        ];

        for (quad, normal) in faces {
            let corners = quad.map(|(x, y, z)| corner(x, y, z));
            mesh.push_quad(corners, self.pose * normal);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::rotation_about_y;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn corners_are_normalized() {
        let b = BoxSpec::from_corners(p(2.0, 0.0, 5.0), p(0.0, 3.0, 1.0));
        assert_eq!(b.min_corner(), p(0.0, 0.0, 1.0));
        assert_eq!(b.max_corner(), p(2.0, 3.0, 5.0));
    }

    #[test]
    fn unit_box_has_24_vertices_and_12_triangles() {
        let mut mesh = MergedGeometry::new();
        BoxSpec::from_corners(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .append_to(&mut mesh)
            .unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn triangle_winding_matches_face_normals() {
        let mut mesh = MergedGeometry::new();
        BoxSpec::from_corners(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0))
            .with_pose(rotation_about_y(p(10.0, 0.0, 0.0), 30.0))
            .append_to(&mut mesh)
            .unwrap();

        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            let winding = (b - a).cross(&(c - a)).normalize();
            let normal = mesh.normals[tri[0] as usize];
            assert_relative_eq!(winding.dot(&normal), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn flat_box_is_degenerate() {
        let mut mesh = MergedGeometry::new();
        let result = BoxSpec::from_corners(p(0.0, 0.0, 0.0), p(1.0, 0.0, 1.0)).append_to(&mut mesh);
        assert!(result.is_err());
        assert!(mesh.is_empty());
    }

    #[test]
    fn infinite_corner_is_rejected() {
        let mut mesh = MergedGeometry::new();
        let result =
            BoxSpec::from_corners(p(0.0, 0.0, 0.0), p(f64::INFINITY, 1.0, 1.0)).append_to(&mut mesh);
        assert!(result.is_err());
    }
}
