use serde::{Deserialize, Serialize};

use crate::math::{heading_degrees, Point2, Vector2};

slotmap::new_key_type! {
    /// Unique identifier for a partition wall in a [`Layout`](crate::layout::Layout).
    pub struct PartitionId;
}

/// A straight freestanding partition between two plan-view `(x, z)` points.
///
/// Partitions are rendered as one slab; length and angle are derived from the
/// endpoints, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionWall {
    pub start: Point2,
    pub end: Point2,
    pub height: f64,
}

impl PartitionWall {
    #[must_use]
    pub fn new(start: Point2, end: Point2, height: f64) -> Self {
        Self { start, end, height }
    }

    /// Vector from start to end in plan view.
    #[must_use]
    pub fn span(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.span().norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Rotation about the vertical axis that aligns a slab's width with the span.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        let span = self.span();
        heading_degrees(span.x, span.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn diagonal_partition_derives_length_and_angle() {
        let wall = PartitionWall::new(Point2::new(0.0, 0.0), Point2::new(300.0, 400.0), 2100.0);
        assert_relative_eq!(wall.length(), 500.0);
        let mid = wall.midpoint();
        assert_relative_eq!(mid.x, 150.0);
        assert_relative_eq!(mid.y, 200.0);
        // +Z span in plan maps to the 270 degree heading.
        let along_z = PartitionWall::new(Point2::new(0.0, 0.0), Point2::new(0.0, 10.0), 1.0);
        assert_relative_eq!(along_z.angle_degrees(), 270.0);
    }
}
