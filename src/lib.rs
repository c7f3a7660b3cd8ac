pub mod config;
pub mod error;
pub mod layout;
pub mod math;
pub mod mesh;
pub mod model;
pub mod operations;
pub mod scene;

pub use config::{LayerScale, PanelConfig};
pub use error::{PanelformError, Result};
pub use layout::{Layout, LayoutGeometry};
pub use mesh::MergedGeometry;
pub use operations::assembly::{build_panel_solid, merge_boxes, BoxSpec};
pub use operations::segment::{segment, segment_with_door, SegmentWall};
pub use operations::stack::{position_layers, stack_heights};
pub use operations::transform::{place_panel, PanelPlacement};
