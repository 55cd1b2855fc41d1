//! Runtime systems for diagnostics and interactive surface edits.

/// FPS overlay for native builds.
pub mod fps_tracking;

/// Keyboard controls that edit the surface configuration and trigger regeneration.
pub mod surface_controls;
