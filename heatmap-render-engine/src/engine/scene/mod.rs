//! Scene dressing around the heatmap surface.

/// Ambient, spot and point lights for the viewer scene.
pub mod lighting;
