use bevy::prelude::*;
use constants::scene::{
    AMBIENT_BRIGHTNESS, POINT_LIGHT_POSITION, SPOT_LIGHT_ANGLE, SPOT_LIGHT_POSITION,
};

/// Ambient fill, a narrow spot light and a back point light
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    // Full penumbra: the cone fades from the axis out to the outer angle
    commands.spawn((
        SpotLight {
            outer_angle: SPOT_LIGHT_ANGLE,
            inner_angle: 0.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SPOT_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
    ));
}
