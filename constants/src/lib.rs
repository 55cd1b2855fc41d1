//! Shared compile-time configuration for the heatmap surface workspace.

/// Synthetic sample generation and density rasterization constants.
pub mod heatmap;

/// Displacement shader defaults and plane mesh resolution.
pub mod render_settings;

/// Camera, lighting and demo control defaults for the viewer scene.
pub mod scene;
