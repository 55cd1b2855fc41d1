use bevy::color::Color;
use bevy::math::UVec2;

/// Vertical exaggeration applied to greymap alpha
pub const DEFAULT_ZSCALE: f32 = 20.0;

/// Tint multiplied into the colour texture
pub const DEFAULT_TINT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

/// Global opacity of the surface
pub const DEFAULT_OPACITY: f32 = 0.5;

/// Default target rectangle in pixels
pub const DEFAULT_RECT: UVec2 = UVec2::new(100, 100);

/// Plane subdivisions per axis, independent of pixel resolution
pub const PLANE_SEGMENTS: u32 = 200;

/// Base depth added to the placed surface's z translation
pub const SURFACE_BASE_DEPTH: f32 = 1.0;

/// Shader asset path for both stages of the displacement program
pub const HEATMAP_SHADER_PATH: &str = "shaders/heatmap_surface.wgsl";
