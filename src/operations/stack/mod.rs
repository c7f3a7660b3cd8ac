use crate::config::LayerScale;
use crate::model::{Layer, LayerPlacement};

/// Stacks slots of the given heights downward from index 0 and centers the
/// whole stack on zero.
///
/// Returns the center of each slot. Heights are taken as given; callers
/// apply any scaling first.
#[must_use]
pub fn stack_heights(heights: &[f64]) -> Vec<f64> {
    let mut cursor = 0.0;
    let mut centers: Vec<f64> = heights
        .iter()
        .map(|&h| {
            cursor -= h;
            cursor + h * 0.5
        })
        .collect();

    let lift = cursor.abs() * 0.5;
    for center in &mut centers {
        *center += lift;
    }
    centers
}

/// Positions layers with the default [`LayerScale`].
#[must_use]
pub fn position_layers(layers: &[Layer]) -> Vec<LayerPlacement<'_>> {
    position_layers_with(layers, &LayerScale::default())
}

/// Positions layers as a vertically centered stack, index 0 on top.
///
/// Both the render height and the stacking use the clamped scaled height, so
/// very thin layers stay visible and stay in order. An empty list yields no
/// placements.
#[must_use]
pub fn position_layers_with<'a>(layers: &'a [Layer], scale: &LayerScale) -> Vec<LayerPlacement<'a>> {
    let heights: Vec<f64> = layers
        .iter()
        .map(|layer| scale.render_height(layer.thickness_mm))
        .collect();
    let centers = stack_heights(&heights);

    layers
        .iter()
        .zip(heights)
        .zip(centers)
        .enumerate()
        .map(|(index, ((layer, height_units), center_offset))| LayerPlacement {
            layer,
            index,
            center_offset,
            height_units,
        })
        .collect()
}

/// Physical thickness of the whole stack in millimeters, unscaled.
#[must_use]
pub fn stack_thickness_mm(layers: &[Layer]) -> f64 {
    layers.iter().map(|layer| layer.thickness_mm).sum()
}
