use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller, orbit_transform};
use crate::engine::core::app_settings::HeatmapAppSettings;
use crate::engine::core::window_config::create_window_config;
use crate::engine::heatmap::material::HeatmapMaterial;
use crate::engine::heatmap::surface::{HeatmapSurfacePlugin, SampleRng, spawn_heatmap_surface};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::surface_controls::surface_control_system;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{create_native_overlays, fps_text_update_system};

pub fn create_app(settings: HeatmapAppSettings) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the shader material before any surface is spawned
        .add_plugins(HeatmapSurfacePlugin);

    if let Some(seed) = settings.seed {
        app.insert_resource(SampleRng::seeded(seed));
    }

    app.insert_resource(settings)
        .init_resource::<OrbitCamera>()
        .add_systems(Startup, setup)
        .add_systems(Update, (orbit_camera_controller, surface_control_system));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((Camera3d::default(), orbit_transform(orbit)));
}

// Startup system: camera, lights and the configured surface
fn setup(
    mut commands: Commands,
    settings: Res<HeatmapAppSettings>,
    orbit: Res<OrbitCamera>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<HeatmapMaterial>>,
) {
    info!(
        "Heatmap surface: rect {}x{}, offset {}, angle {} deg, seed {:?}",
        settings.surface.rect.x,
        settings.surface.rect.y,
        settings.surface.offset_position,
        settings.surface.map_angle,
        settings.seed
    );

    create_camera(&mut commands, &orbit);
    spawn_lighting(&mut commands);
    spawn_heatmap_surface(
        &mut commands,
        &mut meshes,
        &mut materials,
        settings.surface.clone(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}
