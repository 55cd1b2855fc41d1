/// Height-displacement shader material driven by heat and grey maps
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use constants::render_settings::{
    DEFAULT_OPACITY, DEFAULT_TINT_COLOR, DEFAULT_ZSCALE, HEATMAP_SHADER_PATH,
};

#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
pub struct HeatmapUniform {
    pub tint_color: Vec3,
    pub opacity: f32,
    pub zscale: f32,
}

impl HeatmapUniform {
    pub fn new(tint_color: Color, opacity: f32, zscale: f32) -> Self {
        let tint = tint_color.to_linear();
        Self {
            tint_color: Vec3::new(tint.red, tint.green, tint.blue),
            opacity,
            zscale,
        }
    }
}

impl Default for HeatmapUniform {
    fn default() -> Self {
        Self::new(DEFAULT_TINT_COLOR, DEFAULT_OPACITY, DEFAULT_ZSCALE)
    }
}

/// Surface material. Missing textures leave the bindings on the fallback image.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct HeatmapMaterial {
    #[texture(0, visibility(fragment))]
    #[sampler(1, visibility(fragment))]
    pub heatmap: Option<Handle<Image>>,

    #[texture(2, visibility(vertex))]
    #[sampler(3, visibility(vertex))]
    pub greymap: Option<Handle<Image>>,

    #[uniform(4)]
    pub params: HeatmapUniform,
}

impl HeatmapMaterial {
    pub fn has_textures(&self) -> bool {
        self.heatmap.is_some() && self.greymap.is_some()
    }
}

impl Material for HeatmapMaterial {
    fn vertex_shader() -> ShaderRef {
        HEATMAP_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        HEATMAP_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Visible from both sides
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// One-time registration of the heatmap shader material.
///
/// Hosts add this before spawning any surface; adding it again is a no-op.
pub struct HeatmapMaterialPlugin;

impl Plugin for HeatmapMaterialPlugin {
    fn build(&self, app: &mut App) {
        if app.is_plugin_added::<MaterialPlugin<HeatmapMaterial>>() {
            debug!("Heatmap material already registered");
            return;
        }
        app.add_plugins(MaterialPlugin::<HeatmapMaterial>::default());
        info!("Registered heatmap material ({})", HEATMAP_SHADER_PATH);
    }

    fn is_unique(&self) -> bool {
        false
    }
}
