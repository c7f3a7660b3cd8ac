use crate::math::{rotation_about_y, Isometry3, Point3};
use crate::model::{Panel, PanelId, WallAxis, WallRun};

/// World placement of one segmented panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub id: PanelId,
    /// Floor-level position of the panel's center line.
    pub position: Point3,
    /// Rotation about +Y, in degrees.
    pub rotation_degrees: f64,
    /// Maps the panel's local solid frame into the world.
    pub pose: Isometry3,
}

/// Maps a run-local offset to a plan-view world `(x, z)` for `run`.
///
/// The run's own `start_offset` is added here, never during segmentation.
#[must_use]
pub fn run_to_world(run: &WallRun, offset: f64) -> (f64, f64) {
    let along = run.start_offset + offset * run.direction.sign();
    match run.axis {
        WallAxis::X => (along, run.set_back),
        WallAxis::Z => (run.set_back, along),
    }
}

/// Places a panel cut from `run` in world space.
#[must_use]
pub fn place_panel(panel: &Panel, run: &WallRun) -> PanelPlacement {
    let (x, z) = run_to_world(run, panel.center_offset);
    let position = Point3::new(x, 0.0, z);
    PanelPlacement {
        id: panel.id,
        position,
        rotation_degrees: panel.orientation,
        pose: rotation_about_y(position, panel.orientation),
    }
}
