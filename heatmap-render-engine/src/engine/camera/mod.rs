//! Orbit camera for inspecting the heatmap surface.
//!
//! Left drag orbits, right drag pans and the wheel zooms, with the camera
//! transform eased toward the orbit target each frame.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
