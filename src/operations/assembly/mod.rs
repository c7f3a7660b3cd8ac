mod make_box;
mod merge_boxes;
mod panel_solid;

pub use make_box::BoxSpec;
pub use merge_boxes::merge_boxes;
pub use panel_solid::{build_panel_solid, BuildPanelSolid};
