mod derive;

pub use derive::{LayoutGeometry, PlacedPanel, WallGeometry};

use crate::error::{OperationError, Result};
use crate::model::{PartitionId, PartitionWall, WallId, WallRun};
use slotmap::SlotMap;

/// Owns the wall runs and partitions of one configuration.
///
/// Entities are addressed by typed keys so derived panels can name their
/// source wall. A layout is a snapshot: derive geometry from it, then replace
/// it wholesale when the configuration changes.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    walls: SlotMap<WallId, WallRun>,
    partitions: SlotMap<PartitionId, PartitionWall>,
}

impl Layout {
    /// Creates a new, empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Wall operations ---

    /// Inserts a wall run and returns its ID.
    pub fn add_wall(&mut self, run: WallRun) -> WallId {
        self.walls.insert(run)
    }

    /// Returns the wall run, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the layout.
    pub fn wall(&self, id: WallId) -> Result<&WallRun> {
        self.walls
            .get(id)
            .ok_or_else(|| OperationError::EntityNotFound("wall".into()).into())
    }

    /// Removes a wall run, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not in the layout.
    pub fn remove_wall(&mut self, id: WallId) -> Result<WallRun> {
        self.walls
            .remove(id)
            .ok_or_else(|| OperationError::EntityNotFound("wall".into()).into())
    }

    /// Iterates wall runs.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &WallRun)> {
        self.walls.iter()
    }

    // --- Partition operations ---

    /// Inserts a partition wall and returns its ID.
    pub fn add_partition(&mut self, wall: PartitionWall) -> PartitionId {
        self.partitions.insert(wall)
    }

    /// Returns the partition wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the partition is not in the layout.
    pub fn partition(&self, id: PartitionId) -> Result<&PartitionWall> {
        self.partitions
            .get(id)
            .ok_or_else(|| OperationError::EntityNotFound("partition".into()).into())
    }

    /// Iterates partitions.
    pub fn partitions(&self) -> impl Iterator<Item = (PartitionId, &PartitionWall)> {
        self.partitions.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.partitions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::WallAxis;

    #[test]
    fn removed_wall_is_not_found() {
        let mut layout = Layout::new();
        let id = layout.add_wall(WallRun::new(1200.0, 2400.0, WallAxis::X));
        assert!(layout.wall(id).is_ok());
        layout.remove_wall(id).unwrap();
        assert!(layout.wall(id).is_err());
        assert!(layout.remove_wall(id).is_err());
        assert!(layout.is_empty());
    }
}
