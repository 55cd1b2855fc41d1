//! Interactive 3D heatmap surface.
//!
//! Synthetic weighted samples are rasterized into a colour map and a greyscale
//! intensity map; a custom material lifts a subdivided plane by intensity and
//! tints it by colour inside an orbit-controllable Bevy scene.

pub mod engine;

pub use engine::core::app_settings::HeatmapAppSettings;
pub use engine::core::app_setup::create_app;
pub use engine::heatmap::material::HeatmapMaterialPlugin;
pub use engine::heatmap::surface::{HeatmapSurfaceConfig, HeatmapSurfacePlugin};
