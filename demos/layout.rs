//! Derives a small bathroom layout and logs panels and a layer stack.
//!
//! Usage:
//! ```text
//! cargo run --example layout                          # default config
//! cargo run --example layout -- panels.toml           # config overrides from TOML
//! RUST_LOG=panelform=debug cargo run --example layout # segmentation events
//! ```

use panelform::math::Point2;
use panelform::model::{CornerFlags, DoorOpening, Layer, PartitionWall, RunDirection, WallAxis, WallRun};
use panelform::operations::stack::stack_thickness_mm;
use panelform::{position_layers, Layout, PanelConfig, PanelformError};

fn main() -> Result<(), PanelformError> {
    // Default: WARN for everything, INFO for panelform and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=panelform=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("layout=info".parse().unwrap_or_default())
        .add_directive("panelform=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                panelform::error::ConfigError::Invalid(format!("cannot read {path}: {e}"))
            })?;
            PanelConfig::from_toml_str(&text)?
        }
        None => PanelConfig::default(),
    };

    // 2400 x 1800 room, walls walked around the perimeter from the origin corner.
    let mut layout = Layout::new();
    layout.add_wall(
        WallRun::new(2400.0, 2500.0, WallAxis::X).with_corners(CornerFlags::both()),
    );
    layout.add_wall(
        WallRun::new(1800.0, 2500.0, WallAxis::Z)
            .with_start(0.0, 2400.0)
            .with_corners(CornerFlags::both()),
    );
    layout.add_wall(
        WallRun::new(2400.0, 2500.0, WallAxis::X)
            .with_start(2400.0, 1800.0)
            .with_direction(RunDirection::Descending)
            .with_door(DoorOpening::new(700.0, 800.0))
            .with_corners(CornerFlags::both()),
    );
    layout.add_wall(
        WallRun::new(1800.0, 2500.0, WallAxis::Z)
            .with_start(1800.0, 0.0)
            .with_direction(RunDirection::Descending)
            .with_corners(CornerFlags::both()),
    );
    layout.add_partition(PartitionWall::new(
        Point2::new(1600.0, 0.0),
        Point2::new(1600.0, 900.0),
        2000.0,
    ));

    let geometry = layout.derive(&config)?;
    for wall in &geometry.walls {
        for placed in &wall.panels {
            tracing::info!(
                index = placed.panel.id.index,
                width = placed.panel.width,
                flange = ?placed.panel.flange.kind(),
                x = placed.placement.position.x,
                z = placed.placement.position.z,
                rotation = placed.placement.rotation_degrees,
                "panel"
            );
        }
    }
    let scene = geometry.scene_mesh();
    tracing::info!(
        panels = geometry.panel_count(),
        vertices = scene.vertex_count(),
        "scene ready"
    );

    let layers = vec![
        Layer::new("face", 0.6).with_material("steel"),
        Layer::new("core", 60.0).with_material("PIR"),
        Layer::new("back", 0.6).with_material("steel"),
    ];
    for placement in position_layers(&layers) {
        tracing::info!(
            layer = %placement.layer.id,
            center = placement.center_offset,
            height = placement.height_units,
            "layer"
        );
    }
    tracing::info!(thickness_mm = stack_thickness_mm(&layers), "stack");

    Ok(())
}
