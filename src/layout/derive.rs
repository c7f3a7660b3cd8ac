use super::Layout;
use crate::config::PanelConfig;
use crate::error::Result;
use crate::mesh::MergedGeometry;
use crate::model::{Panel, PartitionId, WallId};
use crate::operations::assembly::build_panel_solid;
use crate::operations::segment::SegmentWall;
use crate::operations::transform::{build_partition_solid, place_panel, PanelPlacement};
use crate::scene::SceneMesh;

/// A panel with its world placement and world-space solid.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPanel {
    pub panel: Panel,
    pub placement: PanelPlacement,
    pub solid: MergedGeometry,
}

/// Everything derived from one wall run.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGeometry {
    pub wall: WallId,
    pub panels: Vec<PlacedPanel>,
}

impl WallGeometry {
    /// Sum of panel widths along the run.
    #[must_use]
    pub fn covered_length(&self) -> f64 {
        self.panels.iter().map(|p| p.panel.width).sum()
    }
}

/// Geometry derived from a whole [`Layout`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutGeometry {
    pub walls: Vec<WallGeometry>,
    pub partitions: Vec<(PartitionId, MergedGeometry)>,
}

impl LayoutGeometry {
    /// All panels of all walls, in wall order.
    pub fn panels(&self) -> impl Iterator<Item = &PlacedPanel> {
        self.walls.iter().flat_map(|w| w.panels.iter())
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.walls.iter().map(|w| w.panels.len()).sum()
    }

    /// Merges every panel and partition solid into one millimeter buffer.
    #[must_use]
    pub fn merged(&self) -> MergedGeometry {
        let mut combined = MergedGeometry::new();
        for placed in self.panels() {
            combined.merge(&placed.solid);
        }
        for (_, solid) in &self.partitions {
            combined.merge(solid);
        }
        combined
    }

    /// Merges everything into one scene-unit mesh for the renderer.
    #[must_use]
    pub fn scene_mesh(&self) -> SceneMesh {
        SceneMesh::from_geometry(&self.merged())
    }
}

impl Layout {
    /// Segments, places and builds every wall and partition of the layout.
    ///
    /// Each call is a full recomputation; identical layouts and configs give
    /// identical results.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if a panel or partition solid is degenerate,
    /// e.g. a wall with zero height.
    pub fn derive(&self, config: &PanelConfig) -> Result<LayoutGeometry> {
        let mut walls = Vec::new();
        for (id, run) in self.walls() {
            let mut panels = Vec::new();
            for panel in SegmentWall::new(run, *config).with_wall_id(id).execute() {
                let placement = place_panel(&panel, run);
                let solid = build_panel_solid(&panel, config)?.transformed(&placement.pose);
                panels.push(PlacedPanel {
                    panel,
                    placement,
                    solid,
                });
            }
            walls.push(WallGeometry { wall: id, panels });
        }

        let mut partitions = Vec::new();
        for (id, wall) in self.partitions() {
            partitions.push((id, build_partition_solid(wall, config)?));
        }

        let geometry = LayoutGeometry { walls, partitions };
        tracing::debug!(
            walls = geometry.walls.len(),
            panels = geometry.panel_count(),
            partitions = geometry.partitions.len(),
            "derived layout geometry"
        );
        Ok(geometry)
    }
}
