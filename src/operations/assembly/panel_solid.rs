use super::{merge_boxes, BoxSpec};
use crate::config::PanelConfig;
use crate::error::Result;
use crate::math::Point3;
use crate::mesh::MergedGeometry;
use crate::model::{EdgeFlange, FoldDirection, Panel};

/// Which vertical edge of the panel a flange sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
}

/// Builds the merged solid of one panel in its local frame.
///
/// The local frame has x across the panel (`-width/2 ..= width/2`), y up from
/// the floor (`0 ..= height`) and z through the sheet. The interior-facing
/// face is the plane z = 0 and the body lies behind it in `-thickness ..= 0`.
/// Flanges are `thickness` wide, flush with their edge, and reach
/// `flange width` along z: behind the body for [`FoldDirection::Exterior`],
/// in front of the face for [`FoldDirection::Interior`].
pub struct BuildPanelSolid<'a> {
    panel: &'a Panel,
    config: PanelConfig,
}

impl<'a> BuildPanelSolid<'a> {
    /// Creates a new `BuildPanelSolid` operation.
    #[must_use]
    pub fn new(panel: &'a Panel, config: PanelConfig) -> Self {
        Self { panel, config }
    }

    /// Returns the body and flange boxes before merging.
    #[must_use]
    pub fn boxes(&self) -> Vec<BoxSpec> {
        let half = self.panel.width * 0.5;
        let t = self.config.panel_thickness;
        let h = self.panel.height;

        let mut boxes = vec![BoxSpec::from_corners(
            Point3::new(-half, 0.0, -t),
            Point3::new(half, h, 0.0),
        )];
        let edges = [
            (Edge::Left, self.panel.flange.left),
            (Edge::Right, self.panel.flange.right),
        ];
        for (edge, flange) in edges {
            if let Some(flange) = flange {
                boxes.push(self.flange_box(edge, flange));
            }
        }
        boxes
    }

    fn flange_box(&self, edge: Edge, flange: EdgeFlange) -> BoxSpec {
        let half = self.panel.width * 0.5;
        let t = self.config.panel_thickness;
        let (x0, x1) = match edge {
            Edge::Left => (-half, -half + t),
            Edge::Right => (half - t, half),
        };
        let (z0, z1) = match flange.fold {
            FoldDirection::Exterior => (-t - flange.width, -t),
            FoldDirection::Interior => (0.0, flange.width),
        };
        BoxSpec::from_corners(
            Point3::new(x0, 0.0, z0),
            Point3::new(x1, self.panel.height, z1),
        )
    }

    /// Executes the operation, merging all boxes into one geometry buffer.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if the panel has a non-positive width or
    /// height, or a flange of non-positive width.
    pub fn execute(&self) -> Result<MergedGeometry> {
        merge_boxes(&self.boxes())
    }
}

/// Builds the merged local-frame solid of `panel`.
///
/// # Errors
///
/// See [`BuildPanelSolid::execute`].
pub fn build_panel_solid(panel: &Panel, config: &PanelConfig) -> Result<MergedGeometry> {
    BuildPanelSolid::new(panel, *config).execute()
}
