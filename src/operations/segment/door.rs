use super::{distribute, lay_out, RunContext, SegmentConstraints};
use crate::config::PanelConfig;
use crate::model::{CornerFlags, DoorOpening, EdgeFlange, Panel};

/// Segments a run around a door opening.
///
/// The sub-runs left and right of the opening are segmented independently.
/// A sub-run no longer than `config.max_door_panel_width` becomes a single
/// jamb panel; longer ones are divided like a plain run. Edges against the
/// opening take a door-frame flange; the far ends take a corner flange when
/// the matching corner flag is set. Panels of the right sub-run start at
/// `door.position + door.width`, and a sub-run with no positive length is
/// omitted.
#[must_use]
pub fn segment_with_door(
    wall_length: f64,
    door: DoorOpening,
    corners: CornerFlags,
    context: &RunContext,
    config: &PanelConfig,
) -> Vec<Panel> {
    let door_flange = Some(EdgeFlange::new(config.door_flange_width, config.door_fold));
    let corner_flanges = SegmentConstraints::corners(corners, config);

    let left_length = door.position;
    let right_start = door.end();
    let right_length = wall_length - right_start;

    let mut panels = Vec::new();

    if left_length > 0.0 {
        panels.extend(segment_side(
            left_length,
            &SegmentConstraints::new(corner_flanges.start_flange, door_flange),
            context,
            config,
        ));
    } else {
        tracing::debug!(position = door.position, "no wall left of door opening");
    }

    if right_length > 0.0 {
        let right_context = context
            .with_start_offset(context.start_offset + right_start)
            .with_first_index(context.first_index + panels.len());
        panels.extend(segment_side(
            right_length,
            &SegmentConstraints::new(door_flange, corner_flanges.end_flange),
            &right_context,
            config,
        ));
    } else {
        tracing::debug!(wall_length, door_end = right_start, "no wall right of door opening");
    }

    panels
}

/// Segments one side of a door opening.
fn segment_side(
    length: f64,
    constraints: &SegmentConstraints,
    context: &RunContext,
    config: &PanelConfig,
) -> Vec<Panel> {
    if length <= config.max_door_panel_width {
        tracing::debug!(length, "door side kept as one jamb panel");
        return lay_out(&[length], constraints, context);
    }
    let (distribution, widths) = distribute(length, config);
    tracing::debug!(
        length,
        ?distribution,
        panels = widths.len(),
        "segmented door side"
    );
    lay_out(&widths, constraints, context)
}
