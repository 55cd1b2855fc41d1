pub mod camera;
pub mod core;
pub mod heatmap;
pub mod scene;
pub mod systems;
