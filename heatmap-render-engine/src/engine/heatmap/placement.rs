/// In-plane rotation of the surface origin
use bevy::prelude::*;
use constants::render_settings::SURFACE_BASE_DEPTH;

/// Rotate `offset.xy` by `angle_degrees`; `z` passes through.
///
/// Uses `x' = x cos + y sin`, `y' = y cos - x sin`, which turns clockwise
/// for positive angles in this frame. Keep the sign pattern as is.
pub fn place(offset: Vec3, angle_degrees: f32) -> Vec3 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    Vec3::new(
        offset.x * cos + offset.y * sin,
        offset.y * cos - offset.x * sin,
        offset.z,
    )
}

/// Node translation for a placed surface, including the base depth
pub fn placed_translation(offset: Vec3, angle_degrees: f32) -> Vec3 {
    place(offset, angle_degrees) + Vec3::Z * SURFACE_BASE_DEPTH
}
