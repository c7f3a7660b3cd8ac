mod place_panel;
mod place_partition;

pub use place_panel::{place_panel, run_to_world, PanelPlacement};
pub use place_partition::{build_partition_solid, partition_pose};
