//! Named dimensional constants and the configuration values built from them.
//!
//! Every dimension the segmenter and the solid assembly share is defined here
//! once. [`PanelConfig`] and [`LayerScale`] default to these constants and can
//! be overridden from TOML text handed in by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::model::FoldDirection;

/// Widest panel that can be manufactured, in millimeters.
pub const MAX_PANEL_WIDTH: f64 = 900.0;

/// Narrowest panel that may stand alone, in millimeters.
pub const MIN_PANEL_WIDTH: f64 = 170.0;

/// Longest door-side sub-run still cut as one jamb panel, in millimeters.
///
/// Longer sub-runs beside a door are divided like any other run.
pub const MAX_DOOR_PANEL_WIDTH: f64 = 1200.0;

/// Flange width on corner and wall-end edges, in millimeters.
pub const DEFAULT_FLANGE_WIDTH: f64 = 100.0;

/// Flange width on edges that border a door opening, in millimeters.
pub const DOOR_FLANGE_WIDTH: f64 = 55.0;

/// Sheet thickness of a panel body and its flanges, in millimeters.
pub const PANEL_THICKNESS: f64 = 19.0;

/// Layer thickness (mm) that maps to one render unit in a layer stack.
pub const LAYER_MM_PER_UNIT: f64 = 50.0;

/// Smallest render height of a layer, in render units.
pub const LAYER_MIN_HEIGHT: f64 = 0.05;

/// Largest render height of a layer, in render units.
pub const LAYER_MAX_HEIGHT: f64 = 3.0;

/// Dimensions consumed by the wall segmenter and the panel solid builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Widest panel produced by segmentation.
    pub max_panel_width: f64,
    /// Smallest trailing remainder kept as its own filler panel.
    pub min_panel_width: f64,
    /// Longest sub-run beside a door opening that stays a single panel.
    pub max_door_panel_width: f64,
    /// Flange width used on corner edges.
    pub default_flange_width: f64,
    /// Flange width used on door-frame edges.
    pub door_flange_width: f64,
    /// Sheet thickness.
    pub panel_thickness: f64,
    /// Fold direction of corner flanges.
    pub corner_fold: FoldDirection,
    /// Fold direction of door-frame flanges.
    pub door_fold: FoldDirection,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            max_panel_width: MAX_PANEL_WIDTH,
            min_panel_width: MIN_PANEL_WIDTH,
            max_door_panel_width: MAX_DOOR_PANEL_WIDTH,
            default_flange_width: DEFAULT_FLANGE_WIDTH,
            door_flange_width: DOOR_FLANGE_WIDTH,
            panel_thickness: PANEL_THICKNESS,
            corner_fold: FoldDirection::Interior,
            door_fold: FoldDirection::Exterior,
        }
    }
}

impl PanelConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Invalid`] if the resulting values fail [`Self::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all dimensions are positive and mutually consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first offending value.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_panel_width", self.max_panel_width),
            ("min_panel_width", self.min_panel_width),
            ("max_door_panel_width", self.max_door_panel_width),
            ("default_flange_width", self.default_flange_width),
            ("door_flange_width", self.door_flange_width),
            ("panel_thickness", self.panel_thickness),
        ] {
            ensure_positive(name, value)?;
        }
        if self.min_panel_width >= self.max_panel_width {
            return Err(ConfigError::Invalid(format!(
                "min_panel_width ({}) must be below max_panel_width ({})",
                self.min_panel_width, self.max_panel_width
            ))
            .into());
        }
        if self.max_door_panel_width < self.max_panel_width {
            return Err(ConfigError::Invalid(format!(
                "max_door_panel_width ({}) must not be below max_panel_width ({})",
                self.max_door_panel_width, self.max_panel_width
            ))
            .into());
        }
        if self.panel_thickness * 2.0 > self.min_panel_width {
            return Err(ConfigError::Invalid(
                "panel_thickness leaves no room for two flanges on a minimum-width panel".into(),
            )
            .into());
        }
        Ok(())
    }
}

/// Linear scale with floor and ceiling mapping layer thickness to render height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerScale {
    /// Millimeters of thickness per render unit.
    pub mm_per_unit: f64,
    /// Lower clamp of the render height.
    pub min_height: f64,
    /// Upper clamp of the render height.
    pub max_height: f64,
}

impl Default for LayerScale {
    fn default() -> Self {
        Self {
            mm_per_unit: LAYER_MM_PER_UNIT,
            min_height: LAYER_MIN_HEIGHT,
            max_height: LAYER_MAX_HEIGHT,
        }
    }
}

impl LayerScale {
    /// Parses a layer scale from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Invalid`] if the values fail [`Self::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scale: Self = toml::from_str(text).map_err(ConfigError::from)?;
        scale.validate()?;
        Ok(scale)
    }

    /// Checks that the scale is positive and the clamp range is ordered.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first offending value.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("mm_per_unit", self.mm_per_unit)?;
        ensure_positive("min_height", self.min_height)?;
        ensure_positive("max_height", self.max_height)?;
        if self.min_height > self.max_height {
            return Err(ConfigError::Invalid(format!(
                "min_height ({}) exceeds max_height ({})",
                self.min_height, self.max_height
            ))
            .into());
        }
        Ok(())
    }

    /// Scaled, clamped render height for a layer of `thickness_mm`.
    #[must_use]
    pub fn render_height(&self, thickness_mm: f64) -> f64 {
        (thickness_mm / self.mm_per_unit).clamp(self.min_height, self.max_height)
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive and finite, got {value}")).into())
    }
}
