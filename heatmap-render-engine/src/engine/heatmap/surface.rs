/// Heatmap surface composition: samples, rasterized textures, material and placement
use bevy::prelude::*;
use constants::render_settings::{
    DEFAULT_OPACITY, DEFAULT_RECT, DEFAULT_TINT_COLOR, DEFAULT_ZSCALE, PLANE_SEGMENTS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::gradient::GradientSpec;
use super::material::{HeatmapMaterial, HeatmapMaterialPlugin, HeatmapUniform};
use super::mesh::build_plane_mesh;
use super::placement::placed_translation;
use super::rasterizer::{RasterError, rasterize};
use super::samples::{SampleSet, generate};
use super::texture_bridge::to_texture;

/// Construction-time configuration for a surface. The surface never mutates it.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapSurfaceConfig {
    pub offset_position: Vec3,
    /// Degrees
    pub map_angle: f32,
    /// Target rectangle in pixels (width, height)
    pub rect: UVec2,
    pub zscale: f32,
    pub tint_color: Color,
    pub opacity: f32,
}

impl Default for HeatmapSurfaceConfig {
    fn default() -> Self {
        Self {
            offset_position: Vec3::ZERO,
            map_angle: 0.0,
            rect: DEFAULT_RECT,
            zscale: DEFAULT_ZSCALE,
            tint_color: DEFAULT_TINT_COLOR,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl HeatmapSurfaceConfig {
    pub fn is_degenerate(&self) -> bool {
        self.rect.x == 0 || self.rect.y == 0
    }

    pub fn uniform(&self) -> HeatmapUniform {
        HeatmapUniform::new(self.tint_color, self.opacity, self.zscale)
    }
}

/// Marker for spawned heatmap surface entities
#[derive(Component)]
pub struct HeatmapSurface;

/// Sample RNG shared by every surface
#[derive(Resource)]
pub struct SampleRng(pub StdRng);

impl SampleRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SampleRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Sample set and the two textures rasterized from it
#[derive(Debug, Clone)]
pub struct SurfaceTextures {
    pub sample_set: SampleSet,
    pub heatmap: Handle<Image>,
    pub greymap: Handle<Image>,
}

/// Rectangle-keyed memo of the surface's generated data
#[derive(Component, Debug, Default)]
pub struct SurfaceCache {
    key: Option<UVec2>,
    textures: Option<SurfaceTextures>,
    /// Rect the current plane mesh was built for, tracked apart from the texture key
    mesh_rect: Option<UVec2>,
}

impl SurfaceCache {
    /// Cache for a surface whose plane was already built for `rect`
    pub fn with_mesh_rect(rect: UVec2) -> Self {
        Self {
            mesh_rect: Some(rect),
            ..default()
        }
    }

    pub fn key(&self) -> Option<UVec2> {
        self.key
    }

    pub fn mesh_rect(&self) -> Option<UVec2> {
        self.mesh_rect
    }

    /// Whether the plane mesh must be rebuilt for `rect`
    pub fn needs_mesh(&self, rect: UVec2) -> bool {
        self.mesh_rect != Some(rect)
    }

    pub fn textures(&self) -> Option<&SurfaceTextures> {
        self.textures.as_ref()
    }

    /// Force regeneration on the next refresh
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    fn release(&mut self, images: &mut Assets<Image>) {
        if let Some(old) = self.textures.take() {
            images.remove(&old.heatmap);
            images.remove(&old.greymap);
        }
    }
}

/// Generate samples and rasterize both textures for `rect`.
///
/// Returns `Ok(None)` for a degenerate rectangle without touching the RNG.
pub fn build_surface_textures<R: Rng + ?Sized>(
    rect: UVec2,
    rng: &mut R,
    images: &mut Assets<Image>,
) -> Result<Option<SurfaceTextures>, RasterError> {
    if rect.x == 0 || rect.y == 0 {
        return Ok(None);
    }

    let sample_set = generate(rect.x, rect.y, rng);
    let heat = rasterize(&sample_set, rect.x, rect.y, &GradientSpec::perceptual())?;
    let grey = rasterize(&sample_set, rect.x, rect.y, &GradientSpec::greyscale())?;

    Ok(Some(SurfaceTextures {
        sample_set,
        heatmap: images.add(to_texture(heat)),
        greymap: images.add(to_texture(grey)),
    }))
}

/// Bring cache and material in line with `config`; returns the node visibility.
///
/// Textures are only regenerated when the rectangle differs from the cached key.
pub fn refresh_surface<R: Rng + ?Sized>(
    config: &HeatmapSurfaceConfig,
    cache: &mut SurfaceCache,
    material: &mut HeatmapMaterial,
    rng: &mut R,
    images: &mut Assets<Image>,
) -> Visibility {
    material.params = config.uniform();

    if cache.key != Some(config.rect) {
        cache.release(images);
        cache.key = Some(config.rect);

        match build_surface_textures(config.rect, rng, images) {
            Ok(Some(textures)) => {
                info!(
                    "Generated heatmap textures for {}x{} ({} samples, range {}..={})",
                    config.rect.x,
                    config.rect.y,
                    textures.sample_set.len(),
                    textures.sample_set.min,
                    textures.sample_set.max
                );
                cache.textures = Some(textures);
            }
            Ok(None) => {
                warn!(
                    "Skipping heatmap textures for degenerate rect {}x{}",
                    config.rect.x, config.rect.y
                );
            }
            Err(err) => {
                error!("Heatmap surface initialisation failed: {err}");
            }
        }
    }

    material.heatmap = cache.textures.as_ref().map(|t| t.heatmap.clone());
    material.greymap = cache.textures.as_ref().map(|t| t.greymap.clone());

    if material.has_textures() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Spawn a surface entity for `config`; textures are filled in by `rebuild_surface_textures`
pub fn spawn_heatmap_surface(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<HeatmapMaterial>,
    config: HeatmapSurfaceConfig,
) -> Entity {
    let mesh = plane_for_rect(config.rect);
    let material = HeatmapMaterial {
        params: config.uniform(),
        ..default()
    };
    let translation = placed_translation(config.offset_position, config.map_angle);

    commands
        .spawn((
            HeatmapSurface,
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(material)),
            Transform::from_translation(translation),
            Visibility::Hidden,
            SurfaceCache::with_mesh_rect(config.rect),
            config,
        ))
        .id()
}

fn plane_for_rect(rect: UVec2) -> Mesh {
    build_plane_mesh(rect.x as f32, rect.y as f32, PLANE_SEGMENTS, PLANE_SEGMENTS)
}

/// Regenerate textures and material parameters for surfaces whose config changed
pub fn rebuild_surface_textures(
    mut surfaces: Query<
        (
            &HeatmapSurfaceConfig,
            &mut SurfaceCache,
            &MeshMaterial3d<HeatmapMaterial>,
            &mut Mesh3d,
            &mut Visibility,
        ),
        (With<HeatmapSurface>, Changed<HeatmapSurfaceConfig>),
    >,
    mut rng: ResMut<SampleRng>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<HeatmapMaterial>>,
) {
    for (config, mut cache, material_handle, mut mesh, mut visibility) in &mut surfaces {
        let Some(material) = materials.get_mut(&material_handle.0) else {
            warn!("Heatmap material missing for surface");
            continue;
        };

        if cache.needs_mesh(config.rect) {
            meshes.remove(&mesh.0);
            mesh.0 = meshes.add(plane_for_rect(config.rect));
            cache.mesh_rect = Some(config.rect);
        }

        *visibility = refresh_surface(config, &mut cache, material, &mut rng.0, &mut images);
    }
}

/// Move surfaces whose offset or angle changed
pub fn apply_surface_placement(
    mut surfaces: Query<
        (&HeatmapSurfaceConfig, &mut Transform),
        (With<HeatmapSurface>, Changed<HeatmapSurfaceConfig>),
    >,
) {
    for (config, mut transform) in &mut surfaces {
        transform.translation = placed_translation(config.offset_position, config.map_angle);
    }
}

/// Registers the heatmap material and surface maintenance systems
pub struct HeatmapSurfacePlugin;

impl Plugin for HeatmapSurfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(HeatmapMaterialPlugin)
            .init_resource::<SampleRng>()
            .add_systems(
                Update,
                (rebuild_surface_textures, apply_surface_placement),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = HeatmapSurfaceConfig::default();
        assert_eq!(config.offset_position, Vec3::ZERO);
        assert_eq!(config.map_angle, 0.0);
        assert_eq!(config.rect, UVec2::new(100, 100));
        assert!(!config.is_degenerate());
    }

    #[test]
    fn same_rect_reuses_cached_textures() {
        let mut images = Assets::<Image>::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut cache = SurfaceCache::default();
        let mut material = HeatmapMaterial::default();
        let mut config = HeatmapSurfaceConfig::default();

        refresh_surface(&config, &mut cache, &mut material, &mut rng, &mut images);
        let first = material.heatmap.clone();

        config.map_angle = 45.0;
        config.opacity = 0.9;
        refresh_surface(&config, &mut cache, &mut material, &mut rng, &mut images);

        assert_eq!(material.heatmap, first);
        assert_eq!(material.params.opacity, 0.9);
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn rect_change_replaces_textures() {
        let mut images = Assets::<Image>::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut cache = SurfaceCache::default();
        let mut material = HeatmapMaterial::default();
        let mut config = HeatmapSurfaceConfig::default();

        refresh_surface(&config, &mut cache, &mut material, &mut rng, &mut images);
        let old = material.greymap.clone();

        config.rect = UVec2::new(64, 32);
        let visibility = refresh_surface(&config, &mut cache, &mut material, &mut rng, &mut images);

        assert_eq!(visibility, Visibility::Inherited);
        assert_ne!(material.greymap, old);
        assert_eq!(images.len(), 2);
        let grey = material.greymap.as_ref().and_then(|h| images.get(h)).unwrap();
        assert_eq!((grey.width(), grey.height()), (64, 32));
    }

    #[test]
    fn invalidate_forces_regeneration() {
        let mut images = Assets::<Image>::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut cache = SurfaceCache::default();
        let mut material = HeatmapMaterial::default();
        let config = HeatmapSurfaceConfig::default();

        refresh_surface(&config, &mut cache, &mut material, &mut rng, &mut images);
        let old = material.heatmap.clone();

        cache.invalidate();
        refresh_surface(&config, &mut cache, &mut material, &mut rng, &mut images);
        assert_ne!(material.heatmap, old);
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn invalidate_keeps_mesh_rect() {
        let mut cache = SurfaceCache::with_mesh_rect(UVec2::new(100, 100));
        cache.invalidate();

        assert_eq!(cache.key(), None);
        assert!(!cache.needs_mesh(UVec2::new(100, 100)));
        assert!(cache.needs_mesh(UVec2::new(40, 20)));
        assert!(SurfaceCache::default().needs_mesh(UVec2::new(100, 100)));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: HeatmapSurfaceConfig =
            serde_json::from_str(r#"{ "map_angle": 90.0, "rect": [40, 20] }"#).unwrap();
        assert_eq!(config.map_angle, 90.0);
        assert_eq!(config.rect, UVec2::new(40, 20));
        assert_eq!(config.zscale, DEFAULT_ZSCALE);
    }
}
