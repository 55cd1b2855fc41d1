/// Wrap rasterized pixel buffers as GPU-sampleable images
use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::rasterizer::RasterBuffer;

/// Move a raster buffer into a 2D RGBA8 image with linear, clamped sampling
pub fn to_texture(buffer: RasterBuffer) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: buffer.width,
            height: buffer.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        buffer.pixels,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );

    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::ClampToEdge,
        address_mode_v: ImageAddressMode::ClampToEdge,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        ..default()
    });

    image
}
