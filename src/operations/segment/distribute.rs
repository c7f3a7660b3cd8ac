use crate::config::PanelConfig;
use crate::math::TOLERANCE;

/// How a run length was divided into panel widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Non-positive length: no panels.
    Empty,
    /// Shorter than one maximum-width panel: a single panel spans it all.
    Single,
    /// Divides evenly into maximum-width panels.
    ExactFit,
    /// Maximum-width panels followed by one filler panel.
    WithFiller,
    /// Remainder too small to stand alone: the length is split into equal panels.
    Redistributed,
}

/// Divides `length` into panel widths, left to right.
///
/// Returns an empty list for a non-positive or non-finite length.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
#[must_use]
pub fn distribute(length: f64, config: &PanelConfig) -> (Distribution, Vec<f64>) {
    if !(length.is_finite() && length > 0.0) {
        return (Distribution::Empty, Vec::new());
    }

    let max = config.max_panel_width;
    let full_panels = (length / max).floor() as usize;
    let remainder = length % max;

    if full_panels == 0 {
        // No lower bound here: a run below the minimum width still gets one panel.
        return (Distribution::Single, vec![length]);
    }

    if remainder == 0.0 {
        return (Distribution::ExactFit, vec![max; full_panels]);
    }

    if remainder >= config.min_panel_width {
        let mut widths = vec![max; full_panels];
        widths.push(remainder);
        return (Distribution::WithFiller, widths);
    }

    // Each panel absorbs `remainder / full_panels`, so the width lands in
    // (max, max + min_panel_width). Exceeding max is reported, not corrected.
    let width = length / full_panels as f64;
    debug_assert!(
        width < max + config.min_panel_width,
        "redistributed width {width} outside its bound"
    );
    if width > max + TOLERANCE {
        tracing::warn!(
            length,
            width,
            max,
            overshoot = width - max,
            "redistributed panels exceed the maximum panel width"
        );
    }
    (Distribution::Redistributed, vec![width; full_panels])
}
