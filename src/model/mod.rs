pub mod layer;
pub mod panel;
pub mod partition;
pub mod wall;

pub use layer::{Layer, LayerPlacement};
pub use panel::{EdgeFlange, FlangeKind, FlangeSpec, FoldDirection, Panel, PanelId};
pub use partition::{PartitionId, PartitionWall};
pub use wall::{CornerFlags, DoorOpening, RunDirection, WallAxis, WallId, WallRun};
