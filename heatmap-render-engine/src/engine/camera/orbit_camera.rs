use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::scene::{
    CAMERA_MAX_RADIUS, CAMERA_MIN_RADIUS, CAMERA_PITCH_LIMIT, CAMERA_START, ORBIT_SENSITIVITY,
    PAN_SENSITIVITY, ZOOM_SENSITIVITY,
};

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub smooth_factor: f32,
}

impl OrbitCamera {
    /// Orbit around `focus`, starting at `eye`
    pub fn looking_at(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let radius = offset.length().max(CAMERA_MIN_RADIUS);
        let dir = offset / radius;

        Self {
            focus,
            radius,
            yaw: dir.x.atan2(dir.z),
            pitch: (-dir.y).asin().clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT),
            smooth_factor: 12.0,
        }
    }

    fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch - delta.y * ORBIT_SENSITIVITY)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    /// Translate the focus in the view plane, scaled by distance
    pub fn pan(&mut self, delta: Vec2) {
        let rot = self.rotation();
        let right = rot * Vec3::X;
        let up = rot * Vec3::Y;
        let scale = self.radius * PAN_SENSITIVITY;
        self.focus += (-right * delta.x + up * delta.y) * scale;
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius * (1.0 - scroll * ZOOM_SENSITIVITY))
            .clamp(CAMERA_MIN_RADIUS, CAMERA_MAX_RADIUS);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(CAMERA_START, Vec3::ZERO)
    }
}

/// Target camera transform for the current orbit state
pub fn orbit_transform(orbit: &OrbitCamera) -> Transform {
    let rotation = orbit.rotation();
    Transform {
        translation: orbit.focus + rotation * (Vec3::Z * orbit.radius),
        rotation,
        ..default()
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.orbit(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            orbit.pan(mouse_delta);
        }
    }

    // Pixel and line scroll units
    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();
    if scroll.abs() > f32::EPSILON {
        orbit.zoom(scroll);
    }

    let target = orbit_transform(&orbit);
    let lerp_speed = (orbit.smooth_factor * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
