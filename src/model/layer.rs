use serde::{Deserialize, Serialize};

/// One material slice in a sandwich-panel stack.
///
/// Only `thickness_mm` participates in geometry; the classification fields
/// are carried through for coloring and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub thickness_mm: f64,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Layer {
    #[must_use]
    pub fn new(id: impl Into<String>, thickness_mm: f64) -> Self {
        Self {
            id: id.into(),
            thickness_mm,
            material: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Where a layer sits once the whole stack has been centered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerPlacement<'a> {
    pub layer: &'a Layer,
    /// Position of the layer in the input list; 0 is the top.
    pub index: usize,
    /// Vertical center in render units; the stack is centered on 0.
    pub center_offset: f64,
    /// Clamped render height in render units.
    pub height_units: f64,
}

impl LayerPlacement<'_> {
    /// Upper face of the layer.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.center_offset + self.height_units * 0.5
    }

    /// Lower face of the layer.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center_offset - self.height_units * 0.5
    }
}
