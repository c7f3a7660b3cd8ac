use crate::config::PanelConfig;
use crate::error::Result;
use crate::math::{rotation_about_y, Isometry3, Point3};
use crate::mesh::MergedGeometry;
use crate::model::PartitionWall;
use crate::operations::assembly::{merge_boxes, BoxSpec};

/// Pose of a partition slab: centered on the span midpoint, width along the span.
#[must_use]
pub fn partition_pose(wall: &PartitionWall) -> Isometry3 {
    let mid = wall.midpoint();
    rotation_about_y(Point3::new(mid.x, 0.0, mid.y), wall.angle_degrees())
}

/// Builds the world-space slab of a partition wall.
///
/// The slab is one panel thickness deep and centered on the line between the
/// endpoints.
///
/// # Errors
///
/// Returns a geometry error for a zero-length or zero-height partition.
pub fn build_partition_solid(wall: &PartitionWall, config: &PanelConfig) -> Result<MergedGeometry> {
    let half_length = wall.length() * 0.5;
    let half_t = config.panel_thickness * 0.5;
    let slab = BoxSpec::from_corners(
        Point3::new(-half_length, 0.0, -half_t),
        Point3::new(half_length, wall.height, half_t),
    )
    .with_pose(partition_pose(wall));
    merge_boxes(&[slab])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn slab_spans_between_endpoints() {
        let wall = PartitionWall::new(Point2::new(100.0, 200.0), Point2::new(400.0, 600.0), 2000.0);
        let pose = partition_pose(&wall);
        let start = pose * Point3::new(-250.0, 0.0, 0.0);
        let end = pose * Point3::new(250.0, 0.0, 0.0);
        assert_relative_eq!(start.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(start.z, 200.0, epsilon = 1e-9);
        assert_relative_eq!(end.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(end.z, 600.0, epsilon = 1e-9);
    }

    #[test]
    fn axis_aligned_partition_bounds() {
        let wall = PartitionWall::new(Point2::new(0.0, 1000.0), Point2::new(1500.0, 1000.0), 2100.0);
        let solid = build_partition_solid(&wall, &PanelConfig::default()).unwrap();
        let bb = solid.bounding_box().unwrap();
        assert_relative_eq!(bb.min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.x, 1500.0, epsilon = 1e-9);
        assert_relative_eq!(bb.size().z, 19.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.y, 2100.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_length_partition_is_degenerate() {
        let p = Point2::new(5.0, 5.0);
        let wall = PartitionWall::new(p, p, 2100.0);
        assert!(build_partition_solid(&wall, &PanelConfig::default()).is_err());
    }
}
