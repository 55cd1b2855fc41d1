use bevy::math::Vec3;

/// Initial camera position, looking at the origin
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 100.0);

/// Orbit radius limits
pub const CAMERA_MIN_RADIUS: f32 = 1.0;
pub const CAMERA_MAX_RADIUS: f32 = 2000.0;

/// Pitch limit in radians, just short of the poles
pub const CAMERA_PITCH_LIMIT: f32 = 1.55;

pub const ORBIT_SENSITIVITY: f32 = 0.005;
pub const PAN_SENSITIVITY: f32 = 0.0015;
pub const ZOOM_SENSITIVITY: f32 = 0.1;

/// Ambient brightness in lux-equivalent units (half intensity)
pub const AMBIENT_BRIGHTNESS: f32 = 500.0;

pub const SPOT_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const SPOT_LIGHT_ANGLE: f32 = 0.15;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(-10.0, -10.0, -10.0);

/// Demo control step sizes
pub const ANGLE_STEP_DEGREES: f32 = 15.0;
pub const RECT_STEP: u32 = 20;
pub const OFFSET_STEP: f32 = 5.0;
