use serde::{Deserialize, Serialize};

use super::wall::WallId;

/// Identifies a panel by its source wall and its position within that wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId {
    pub wall: WallId,
    pub index: usize,
}

/// Direction a flange is folded relative to the panel's interior-facing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldDirection {
    /// Folds away from the interior-facing side, behind the panel.
    Exterior,
    /// Folds towards the interior-facing side, in front of the panel.
    Interior,
}

/// Which edges of a panel carry a flange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlangeKind {
    None,
    Left,
    Right,
    Both,
}

/// A flange on one panel edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeFlange {
    /// Depth of the folded edge, in millimeters.
    pub width: f64,
    pub fold: FoldDirection,
}

impl EdgeFlange {
    #[must_use]
    pub fn new(width: f64, fold: FoldDirection) -> Self {
        Self { width, fold }
    }
}

/// Edge folding metadata of a panel.
///
/// An edge's width is zero exactly when [`FlangeSpec::kind`] excludes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlangeSpec {
    pub left: Option<EdgeFlange>,
    pub right: Option<EdgeFlange>,
}

impl FlangeSpec {
    /// A panel without flanges.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(left: Option<EdgeFlange>, right: Option<EdgeFlange>) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn kind(&self) -> FlangeKind {
        match (self.left.is_some(), self.right.is_some()) {
            (false, false) => FlangeKind::None,
            (true, false) => FlangeKind::Left,
            (false, true) => FlangeKind::Right,
            (true, true) => FlangeKind::Both,
        }
    }

    #[must_use]
    pub fn left_width(&self) -> f64 {
        self.left.map_or(0.0, |f| f.width)
    }

    #[must_use]
    pub fn right_width(&self) -> f64 {
        self.right.map_or(0.0, |f| f.width)
    }
}

/// A single manufactured panel produced by segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    /// Center of the panel along its run, in millimeters.
    pub center_offset: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation about the vertical axis, in degrees.
    pub orientation: f64,
    pub flange: FlangeSpec,
}

impl Panel {
    /// Offset of the panel's left edge along its run.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.center_offset - self.width * 0.5
    }

    /// Offset of the panel's right edge along its run.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.center_offset + self.width * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_present_edges() {
        let f = EdgeFlange::new(100.0, FoldDirection::Interior);
        assert_eq!(FlangeSpec::none().kind(), FlangeKind::None);
        assert_eq!(FlangeSpec::new(Some(f), None).kind(), FlangeKind::Left);
        assert_eq!(FlangeSpec::new(None, Some(f)).kind(), FlangeKind::Right);
        assert_eq!(FlangeSpec::new(Some(f), Some(f)).kind(), FlangeKind::Both);
    }

    #[test]
    fn absent_edges_have_zero_width() {
        let spec = FlangeSpec::new(None, Some(EdgeFlange::new(55.0, FoldDirection::Exterior)));
        assert!(spec.left_width().abs() < f64::EPSILON);
        assert!((spec.right_width() - 55.0).abs() < f64::EPSILON);
    }
}
