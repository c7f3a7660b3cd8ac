use approx::assert_relative_eq;
use panelform::model::Layer;
use panelform::{position_layers, stack_heights};
use proptest::prelude::*;

#[test]
fn scaled_heights_center_symmetrically() {
    let heights = [1.0, 2.0, 3.0];
    let centers = stack_heights(&heights);

    let top = centers[0] + heights[0] / 2.0;
    let bottom = centers[2] - heights[2] / 2.0;
    assert_relative_eq!(top + bottom, 0.0);
    assert_relative_eq!(top - bottom, 6.0);

    let highest = centers
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(highest, centers[0]);
}

proptest! {
    #[test]
    fn stack_is_contiguous_and_centered(thicknesses in prop::collection::vec(0.0f64..500.0, 1..12)) {
        let layers: Vec<Layer> = thicknesses
            .iter()
            .enumerate()
            .map(|(i, &t)| Layer::new(format!("layer-{i}"), t))
            .collect();
        let placements = position_layers(&layers);
        prop_assert_eq!(placements.len(), layers.len());

        for pair in placements.windows(2) {
            prop_assert!((pair[0].bottom() - pair[1].top()).abs() < 1e-9);
            prop_assert!(pair[0].center_offset > pair[1].center_offset);
        }
        let top = placements[0].top();
        let bottom = placements[placements.len() - 1].bottom();
        prop_assert!((top + bottom).abs() < 1e-9);
        for placement in &placements {
            prop_assert!(placement.height_units >= 0.05 && placement.height_units <= 3.0);
        }
    }

    #[test]
    fn positioning_is_idempotent(thicknesses in prop::collection::vec(0.0f64..500.0, 0..12)) {
        let layers: Vec<Layer> = thicknesses.iter().map(|&t| Layer::new("l", t)).collect();
        prop_assert_eq!(position_layers(&layers), position_layers(&layers));
    }
}
