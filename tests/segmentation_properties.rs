use approx::assert_relative_eq;
use panelform::config::{MAX_PANEL_WIDTH, MIN_PANEL_WIDTH};
use panelform::model::{CornerFlags, DoorOpening, EdgeFlange, FlangeKind, FoldDirection, Panel, WallId};
use panelform::operations::segment::{distribute, Distribution, RunContext, SegmentConstraints};
use panelform::{segment, segment_with_door, PanelConfig};
use proptest::prelude::*;

fn context() -> RunContext {
    RunContext::new(WallId::default(), 2400.0)
}

fn corner() -> Option<EdgeFlange> {
    Some(EdgeFlange::new(100.0, FoldDirection::Interior))
}

fn segment_plain(length: f64) -> Vec<Panel> {
    segment(
        length,
        &SegmentConstraints::new(corner(), corner()),
        &context(),
        &PanelConfig::default(),
    )
}

/// Checks that only the outer panels of one door side carry flanges, with the
/// expected widths on each outer edge.
fn check_door_side(side: &[&Panel], start_width: f64, end_width: f64) -> Result<(), TestCaseError> {
    let last = side.len().saturating_sub(1);
    for (i, panel) in side.iter().enumerate() {
        prop_assert_eq!(panel.flange.left.is_some(), i == 0);
        prop_assert_eq!(panel.flange.right.is_some(), i == last);
        if i == 0 {
            prop_assert!((panel.flange.left_width() - start_width).abs() < 1e-9);
        }
        if i == last {
            prop_assert!((panel.flange.right_width() - end_width).abs() < 1e-9);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn widths_cover_the_run(length in 1.0f64..20_000.0) {
        let total: f64 = segment_plain(length).iter().map(|p| p.width).sum();
        prop_assert!((total - length).abs() < 1e-6, "total {} vs length {}", total, length);
    }

    #[test]
    fn panels_are_contiguous(length in 1.0f64..20_000.0) {
        let panels = segment_plain(length);
        for pair in panels.windows(2) {
            prop_assert!((pair[0].end() - pair[1].start()).abs() < 1e-6);
        }
        prop_assert!(panels[0].start().abs() < 1e-9);
    }

    #[test]
    fn widths_respect_the_maximum(length in 1.0f64..20_000.0) {
        let (distribution, _) = distribute(length, &PanelConfig::default());
        for panel in segment_plain(length) {
            match distribution {
                Distribution::Empty
                | Distribution::Single
                | Distribution::ExactFit
                | Distribution::WithFiller => {
                    prop_assert!(panel.width <= MAX_PANEL_WIDTH + 1e-9);
                }
                Distribution::Redistributed => {
                    prop_assert!(panel.width < MAX_PANEL_WIDTH + MIN_PANEL_WIDTH);
                }
            }
        }
    }

    #[test]
    fn no_slivers_unless_run_is_a_sliver(length in 1.0f64..20_000.0) {
        for panel in segment_plain(length) {
            prop_assert!(panel.width >= MIN_PANEL_WIDTH - 1e-9 || length < MIN_PANEL_WIDTH);
        }
    }

    #[test]
    fn only_outer_panels_carry_flanges(length in 1.0f64..20_000.0) {
        let panels = segment_plain(length);
        let last = panels.len() - 1;
        for (i, panel) in panels.iter().enumerate() {
            if i != 0 && i != last {
                prop_assert_eq!(panel.flange.kind(), FlangeKind::None);
            }
        }
    }

    #[test]
    fn door_split_covers_everything_but_the_opening(
        length in 500.0f64..12_000.0,
        position_ratio in 0.0f64..1.0,
        door_width in 600.0f64..1000.0,
    ) {
        prop_assume!(door_width < length);
        let position = (length - door_width) * position_ratio;
        let door = DoorOpening::new(position, door_width);
        let panels = segment_with_door(length, door, CornerFlags::both(), &context(), &PanelConfig::default());

        let total: f64 = panels.iter().map(|p| p.width).sum();
        prop_assert!((total - (length - door_width)).abs() < 1e-6);
        for panel in &panels {
            let inside_door = panel.start() < door.end() - 1e-9 && panel.end() > door.position + 1e-9;
            prop_assert!(!inside_door, "panel overlaps the opening");
            prop_assert!(panel.width > 0.0);
        }

        let (left, right): (Vec<&Panel>, Vec<&Panel>) =
            panels.iter().partition(|p| p.end() <= door.position + 1e-9);
        check_door_side(&left, 100.0, 55.0)?;
        check_door_side(&right, 55.0, 100.0)?;
    }

    #[test]
    fn segmentation_is_idempotent(length in -100.0f64..20_000.0) {
        prop_assert_eq!(segment_plain(length), segment_plain(length));
    }
}

#[test]
fn door_split_example() {
    let panels = segment_with_door(
        3000.0,
        DoorOpening::new(1000.0, 900.0),
        CornerFlags::new(true, true),
        &context(),
        &PanelConfig::default(),
    );
    assert_eq!(panels.len(), 2);
    assert_relative_eq!(panels[0].width, 1000.0);
    assert_relative_eq!(panels[0].flange.left_width(), 100.0);
    assert_relative_eq!(panels[0].flange.right_width(), 55.0);
    assert_relative_eq!(panels[1].width, 1100.0);
    assert_relative_eq!(panels[1].flange.left_width(), 55.0);
    assert_relative_eq!(panels[1].flange.right_width(), 100.0);
    let total: f64 = panels.iter().map(|p| p.width).sum();
    assert_relative_eq!(total, 2000.0);
}

#[test]
fn redistribution_example() {
    let panels = segment_plain(1850.0);
    assert_eq!(panels.len(), 2);
    assert_relative_eq!(panels[0].width, 925.0);
    assert_relative_eq!(panels[1].width, 925.0);
    assert_relative_eq!(panels[0].width + panels[1].width, 1850.0);
}

#[test]
fn exact_fit_example() {
    let widths: Vec<f64> = segment_plain(1800.0).iter().map(|p| p.width).collect();
    assert_eq!(widths, vec![900.0, 900.0]);
}

#[test]
fn sub_minimum_wall_keeps_its_single_panel() {
    let panels = segment_plain(120.0);
    assert_eq!(panels.len(), 1);
    assert_relative_eq!(panels[0].width, 120.0);
    assert_eq!(panels[0].flange.kind(), FlangeKind::Both);
}

#[test]
fn empty_inputs_give_empty_outputs() {
    assert!(segment_plain(0.0).is_empty());
    assert!(segment_plain(-250.0).is_empty());
    assert!(panelform::position_layers(&[]).is_empty());
}
