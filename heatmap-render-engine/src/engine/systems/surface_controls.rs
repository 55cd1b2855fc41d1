use bevy::prelude::*;
use constants::scene::{ANGLE_STEP_DEGREES, OFFSET_STEP, RECT_STEP};

use crate::engine::heatmap::surface::{HeatmapSurface, HeatmapSurfaceConfig, SurfaceCache};

/// Keyboard edits a host makes to its surface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEdit {
    RotateClockwise,
    RotateCounterClockwise,
    GrowRect,
    ShrinkRect,
    Nudge(IVec2),
}

impl SurfaceEdit {
    /// Apply the edit, returning the new configuration
    pub fn apply(self, config: &HeatmapSurfaceConfig) -> HeatmapSurfaceConfig {
        let mut next = config.clone();
        match self {
            SurfaceEdit::RotateClockwise => {
                next.map_angle = (next.map_angle + ANGLE_STEP_DEGREES).rem_euclid(360.0);
            }
            SurfaceEdit::RotateCounterClockwise => {
                next.map_angle = (next.map_angle - ANGLE_STEP_DEGREES).rem_euclid(360.0);
            }
            SurfaceEdit::GrowRect => {
                next.rect = next.rect.saturating_add(UVec2::splat(RECT_STEP));
            }
            SurfaceEdit::ShrinkRect => {
                next.rect = next.rect.saturating_sub(UVec2::splat(RECT_STEP));
            }
            SurfaceEdit::Nudge(dir) => {
                next.offset_position += dir.as_vec2().extend(0.0) * OFFSET_STEP;
            }
        }
        next
    }
}

fn pressed_edits(keyboard: &ButtonInput<KeyCode>) -> Vec<SurfaceEdit> {
    let bindings = [
        (KeyCode::ArrowRight, SurfaceEdit::RotateClockwise),
        (KeyCode::ArrowLeft, SurfaceEdit::RotateCounterClockwise),
        (KeyCode::ArrowUp, SurfaceEdit::GrowRect),
        (KeyCode::ArrowDown, SurfaceEdit::ShrinkRect),
        (KeyCode::KeyW, SurfaceEdit::Nudge(IVec2::Y)),
        (KeyCode::KeyS, SurfaceEdit::Nudge(IVec2::NEG_Y)),
        (KeyCode::KeyD, SurfaceEdit::Nudge(IVec2::X)),
        (KeyCode::KeyA, SurfaceEdit::Nudge(IVec2::NEG_X)),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, edit)| edit)
        .collect()
}

/// Demo controls: arrows rotate and resize, WASD nudges the offset, R reseeds
pub fn surface_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut surfaces: Query<(&mut HeatmapSurfaceConfig, &mut SurfaceCache), With<HeatmapSurface>>,
) {
    let edits = pressed_edits(&keyboard);
    let reseed = keyboard.just_pressed(KeyCode::KeyR);
    if edits.is_empty() && !reseed {
        return;
    }

    for (mut config, mut cache) in &mut surfaces {
        let next = edits.iter().fold(config.clone(), |acc, edit| edit.apply(&acc));

        if reseed {
            cache.invalidate();
            config.set_changed();
        }

        if next != *config {
            info!(
                "Surface config: rect {}x{}, offset {}, angle {} deg",
                next.rect.x, next.rect.y, next.offset_position, next.map_angle
            );
            *config = next;
        }
    }
}
