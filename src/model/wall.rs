use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::math::Vector2;

slotmap::new_key_type! {
    /// Unique identifier for a wall run in a [`Layout`](crate::layout::Layout).
    pub struct WallId;
}

/// Principal horizontal axis a wall run is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallAxis {
    /// Runs along world X; the set-back is a Z coordinate.
    X,
    /// Runs along world Z; the set-back is an X coordinate.
    Z,
}

/// Whether panel offsets advance towards the positive or negative end of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunDirection {
    #[default]
    Ascending,
    Descending,
}

impl RunDirection {
    /// `1.0` for ascending runs, `-1.0` for descending ones.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Ascending => 1.0,
            Self::Descending => -1.0,
        }
    }
}

/// A door opening inside a wall run, measured from the run's start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorOpening {
    /// Distance from the run start to the near jamb, in millimeters.
    pub position: f64,
    /// Clear width of the opening, in millimeters.
    pub width: f64,
}

impl DoorOpening {
    #[must_use]
    pub fn new(position: f64, width: f64) -> Self {
        Self { position, width }
    }

    /// Distance from the run start to the far jamb.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.position + self.width
    }
}

/// Which ends of a wall run meet a corner and therefore carry a flange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CornerFlags {
    pub left: bool,
    pub right: bool,
}

impl CornerFlags {
    #[must_use]
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Flags for a run with corners at both ends.
    #[must_use]
    pub fn both() -> Self {
        Self::new(true, true)
    }
}

/// A straight, unbroken span of wall to be paneled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallRun {
    /// Run length in millimeters.
    pub length: f64,
    /// Panel height in millimeters.
    pub height: f64,
    /// Coordinate on the run axis where the run starts.
    pub start_offset: f64,
    pub axis: WallAxis,
    #[serde(default)]
    pub direction: RunDirection,
    /// Fixed coordinate on the other horizontal axis.
    #[serde(default)]
    pub set_back: f64,
    #[serde(default)]
    pub door: Option<DoorOpening>,
    #[serde(default)]
    pub corners: CornerFlags,
}

impl WallRun {
    /// Creates a run along `axis` starting at the origin, ascending, without
    /// door or corner flanges.
    #[must_use]
    pub fn new(length: f64, height: f64, axis: WallAxis) -> Self {
        Self {
            length,
            height,
            start_offset: 0.0,
            axis,
            direction: RunDirection::Ascending,
            set_back: 0.0,
            door: None,
            corners: CornerFlags::default(),
        }
    }

    #[must_use]
    pub fn with_start(mut self, start_offset: f64, set_back: f64) -> Self {
        self.start_offset = start_offset;
        self.set_back = set_back;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: RunDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_door(mut self, door: DoorOpening) -> Self {
        self.door = Some(door);
        self
    }

    #[must_use]
    pub fn with_corners(mut self, corners: CornerFlags) -> Self {
        self.corners = corners;
        self
    }

    /// Unit plan-view `(x, z)` direction in which panel offsets advance.
    #[must_use]
    pub fn run_direction(&self) -> Vector2 {
        let sign = self.direction.sign();
        match self.axis {
            WallAxis::X => Vector2::new(sign, 0.0),
            WallAxis::Z => Vector2::new(0.0, sign),
        }
    }

    /// Rotation about +Y, in degrees, that turns a panel's local +X onto
    /// [`Self::run_direction`]: 0, 90, 180 or 270.
    #[must_use]
    pub fn heading_degrees(&self) -> f64 {
        match (self.axis, self.direction) {
            (WallAxis::X, RunDirection::Ascending) => 0.0,
            (WallAxis::Z, RunDirection::Descending) => 90.0,
            (WallAxis::X, RunDirection::Descending) => 180.0,
            (WallAxis::Z, RunDirection::Ascending) => 270.0,
        }
    }

    /// Checks the run's dimensional invariants.
    ///
    /// Segmentation never requires this; it is for input layers that want to
    /// reject a run before it reaches the geometry core.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the length or height is not
    /// positive, or the door opening does not fit inside the run.
    pub fn validate(&self) -> Result<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "wall length must be positive, got {}",
                self.length
            ))
            .into());
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "wall height must be positive, got {}",
                self.height
            ))
            .into());
        }
        if let Some(door) = self.door {
            if door.position < 0.0 || door.width < 0.0 {
                return Err(OperationError::InvalidInput(
                    "door position and width must be non-negative".into(),
                )
                .into());
            }
            if door.end() > self.length {
                return Err(OperationError::InvalidInput(format!(
                    "door ends at {} beyond wall length {}",
                    door.end(),
                    self.length
                ))
                .into());
            }
        }
        Ok(())
    }
}
