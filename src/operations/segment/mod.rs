mod distribute;
mod door;

pub use distribute::{distribute, Distribution};
pub use door::segment_with_door;

use crate::config::PanelConfig;
use crate::model::{CornerFlags, EdgeFlange, FlangeSpec, Panel, PanelId, WallId, WallRun};

/// Flanges requested at the two ends of a run being segmented.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentConstraints {
    /// Flange for the left edge of the first panel.
    pub start_flange: Option<EdgeFlange>,
    /// Flange for the right edge of the last panel.
    pub end_flange: Option<EdgeFlange>,
}

impl SegmentConstraints {
    /// Requests the given flanges on the outer edges of the run.
    #[must_use]
    pub fn new(start_flange: Option<EdgeFlange>, end_flange: Option<EdgeFlange>) -> Self {
        Self {
            start_flange,
            end_flange,
        }
    }

    /// Corner flanges of the configured width at the flagged ends.
    #[must_use]
    pub fn corners(corners: CornerFlags, config: &PanelConfig) -> Self {
        let corner = EdgeFlange::new(config.default_flange_width, config.corner_fold);
        Self {
            start_flange: corners.left.then_some(corner),
            end_flange: corners.right.then_some(corner),
        }
    }
}

/// Properties shared by every panel cut from one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunContext {
    /// Source wall stamped into every [`PanelId`].
    pub wall: WallId,
    /// Panel height in millimeters.
    pub height: f64,
    /// Run-local offset of the first panel's left edge.
    pub start_offset: f64,
    /// Rotation applied to every panel, in degrees.
    pub orientation: f64,
    /// Index given to the first panel.
    pub first_index: usize,
}

impl RunContext {
    /// Context for a run of `wall` starting at offset 0, unrotated, indexed from 0.
    #[must_use]
    pub fn new(wall: WallId, height: f64) -> Self {
        Self {
            wall,
            height,
            start_offset: 0.0,
            orientation: 0.0,
            first_index: 0,
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_start_offset(mut self, start_offset: f64) -> Self {
        self.start_offset = start_offset;
        self
    }

    #[must_use]
    pub fn with_first_index(mut self, first_index: usize) -> Self {
        self.first_index = first_index;
        self
    }
}

/// Partitions a run of `wall_length` into panels, left to right.
///
/// Only the first panel may carry the start flange and only the last panel the
/// end flange. A non-positive length yields no panels.
#[must_use]
pub fn segment(
    wall_length: f64,
    constraints: &SegmentConstraints,
    context: &RunContext,
    config: &PanelConfig,
) -> Vec<Panel> {
    let (distribution, widths) = distribute(wall_length, config);
    tracing::debug!(
        wall_length,
        ?distribution,
        panels = widths.len(),
        "segmented run"
    );
    lay_out(&widths, constraints, context)
}

/// Turns widths into panels with running centers from `context.start_offset`.
fn lay_out(widths: &[f64], constraints: &SegmentConstraints, context: &RunContext) -> Vec<Panel> {
    let last = widths.len().saturating_sub(1);
    let mut cursor = context.start_offset;
    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let center_offset = cursor + width * 0.5;
            cursor += width;
            Panel {
                id: PanelId {
                    wall: context.wall,
                    index: context.first_index + i,
                },
                center_offset,
                width,
                height: context.height,
                orientation: context.orientation,
                flange: FlangeSpec::new(
                    constraints.start_flange.filter(|_| i == 0),
                    constraints.end_flange.filter(|_| i == last),
                ),
            }
        })
        .collect()
}

/// Segments a whole wall run into panels in run-local coordinates.
///
/// Runs with a door opening are split around it; corner flags become corner
/// flanges on the outer ends. The run's own `start_offset` is applied later,
/// when panels are placed.
pub struct SegmentWall<'a> {
    run: &'a WallRun,
    wall: WallId,
    config: PanelConfig,
}

impl<'a> SegmentWall<'a> {
    /// Creates a new `SegmentWall` operation.
    #[must_use]
    pub fn new(run: &'a WallRun, config: PanelConfig) -> Self {
        Self {
            run,
            wall: WallId::default(),
            config,
        }
    }

    /// Sets the wall id stamped into every produced [`PanelId`].
    #[must_use]
    pub fn with_wall_id(mut self, wall: WallId) -> Self {
        self.wall = wall;
        self
    }

    /// Executes the segmentation. Never fails; an empty list is a valid result.
    #[must_use]
    pub fn execute(&self) -> Vec<Panel> {
        let context = RunContext::new(self.wall, self.run.height)
            .with_orientation(self.run.heading_degrees());

        match self.run.door {
            Some(door) => segment_with_door(
                self.run.length,
                door,
                self.run.corners,
                &context,
                &self.config,
            ),
            None => segment(
                self.run.length,
                &SegmentConstraints::corners(self.run.corners, &self.config),
                &context,
                &self.config,
            ),
        }
    }
}
