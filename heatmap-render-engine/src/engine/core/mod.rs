//! Core application setup.
//!
//! Builds the Bevy app with window, asset and diagnostics plugins, registers
//! the heatmap surface pipeline and spawns the initial scene for both native
//! and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app, registers the heatmap material once, and wires the
/// camera, lighting and demo control systems.
pub mod app_setup;

/// Startup settings: sample seed and initial surface configuration.
pub mod app_settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
