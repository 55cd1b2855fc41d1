/// Off-screen density rasterization of weighted samples into RGBA buffers
use std::collections::BTreeMap;

use bevy::prelude::*;
use constants::heatmap::{PALETTE_SIZE, SPLAT_BLUR, SPLAT_MIN_ALPHA};
use thiserror::Error;

use super::gradient::GradientSpec;
use super::samples::SampleSet;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("cannot rasterize into a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("failed to allocate a {width}x{height} off-screen surface")]
    SurfaceAllocation { width: u32, height: u32 },
}

/// RGBA8 pixel grid, row-major with row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterBuffer {
    /// RGBA at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let rgba = self.pixels.get(i..i + 4)?;
        Some([rgba[0], rgba[1], rgba[2], rgba[3]])
    }
}

/// Coalesced splat: summed value at a single pixel coordinate
#[derive(Debug, Clone, Copy)]
struct Splat {
    radius: u32,
    value: u32,
}

/// Hidden alpha-only drawing surface. Lives only for one rasterization.
struct ShadowSurface {
    width: u32,
    height: u32,
    alpha: Vec<f32>,
}

impl ShadowSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, RasterError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RasterError::SurfaceAllocation { width, height })?;

        let mut alpha = Vec::new();
        alpha
            .try_reserve_exact(len)
            .map_err(|_| RasterError::SurfaceAllocation { width, height })?;
        alpha.resize(len, 0.0);

        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    /// Draw a blurred radial template with source-over compositing
    fn draw_splat(&mut self, cx: u32, cy: u32, radius: u32, global_alpha: f32) {
        let r = radius as f32;
        if r <= 0.0 {
            return;
        }
        let inner = r * (1.0 - SPLAT_BLUR);
        let (cx_f, cy_f) = (cx as f32, cy as f32);

        let x0 = cx.saturating_sub(radius);
        let y0 = cy.saturating_sub(radius);
        let x1 = (cx + radius).min(self.width);
        let y1 = (cy + radius).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx_f;
                let dy = py as f32 + 0.5 - cy_f;
                let distance = (dx * dx + dy * dy).sqrt();

                let template = if distance <= inner {
                    1.0
                } else if distance >= r {
                    0.0
                } else {
                    1.0 - (distance - inner) / (r - inner)
                };

                let src = template * global_alpha;
                if src <= 0.0 {
                    continue;
                }

                let i = py as usize * self.width as usize + px as usize;
                let dst = self.alpha[i];
                self.alpha[i] = src + dst * (1.0 - src);
            }
        }
    }

    /// Map accumulated alpha through the palette into an RGBA buffer
    fn colorize(&self, palette: &[[u8; 3]; PALETTE_SIZE]) -> Result<RasterBuffer, RasterError> {
        let (width, height) = (self.width, self.height);
        let len = self
            .alpha
            .len()
            .checked_mul(4)
            .ok_or(RasterError::SurfaceAllocation { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RasterError::SurfaceAllocation { width, height })?;
        pixels.resize(len, 0u8);

        for (i, &a) in self.alpha.iter().enumerate() {
            let alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            if alpha == 0 {
                continue;
            }
            let [r, g, b] = palette[alpha as usize];
            pixels[i * 4..i * 4 + 4].copy_from_slice(&[r, g, b, alpha]);
        }

        Ok(RasterBuffer {
            width,
            height,
            pixels,
        })
    }
}

/// Density-map renderer configured with a target rectangle and gradient
pub struct DensityRasterizer {
    width: u32,
    height: u32,
    palette: [[u8; 3]; PALETTE_SIZE],
}

impl DensityRasterizer {
    pub fn new(width: u32, height: u32, gradient: &GradientSpec) -> Self {
        Self {
            width,
            height,
            palette: gradient.palette(),
        }
    }

    /// Rasterize a sample set. The shadow surface is dropped before returning.
    pub fn rasterize(&self, sample_set: &SampleSet) -> Result<RasterBuffer, RasterError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(RasterError::EmptySurface { width, height });
        }

        let mut surface = ShadowSurface::allocate(width, height)?;
        let splats = coalesce(sample_set);

        let min = sample_set.min as f32;
        let max = splats
            .values()
            .map(|s| s.value)
            .fold(sample_set.max, u32::max) as f32;

        for (&(y, x), splat) in &splats {
            let global_alpha = template_alpha(splat.value as f32, min, max);
            surface.draw_splat(x, y, splat.radius, global_alpha);
        }

        debug!(
            "Rasterized {} splats into {}x{} surface (range {}..={})",
            splats.len(),
            width,
            height,
            min,
            max
        );

        surface.colorize(&self.palette)
    }
}

/// Rasterize `sample_set` into a `width` x `height` buffer under `gradient`
pub fn rasterize(
    sample_set: &SampleSet,
    width: u32,
    height: u32,
    gradient: &GradientSpec,
) -> Result<RasterBuffer, RasterError> {
    DensityRasterizer::new(width, height, gradient).rasterize(sample_set)
}

/// Merge samples sharing a pixel by summing their values
fn coalesce(sample_set: &SampleSet) -> BTreeMap<(u32, u32), Splat> {
    let mut splats: BTreeMap<(u32, u32), Splat> = BTreeMap::new();

    for sample in &sample_set.samples {
        splats
            .entry((sample.y, sample.x))
            .and_modify(|splat| {
                splat.value += sample.value;
                splat.radius = splat.radius.max(sample.radius);
            })
            .or_insert(Splat {
                radius: sample.radius,
                value: sample.value,
            });
    }

    splats
}

fn template_alpha(value: f32, min: f32, max: f32) -> f32 {
    if max <= min {
        return 1.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0).max(SPLAT_MIN_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::heatmap::samples::Sample;
    use constants::heatmap::SAMPLE_RADIUS;

    fn sample(x: u32, y: u32, value: u32) -> Sample {
        Sample {
            x,
            y,
            radius: SAMPLE_RADIUS,
            value,
        }
    }

    #[test]
    fn buffer_matches_rectangle() {
        let set = SampleSet::from_samples(vec![sample(5, 5, 10)]);
        let buffer = rasterize(&set, 37, 21, &GradientSpec::perceptual()).unwrap();
        assert_eq!((buffer.width, buffer.height), (37, 21));
        assert_eq!(buffer.pixels.len(), 37 * 21 * 4);
    }

    #[test]
    fn max_sample_is_brighter_than_min_sample() {
        let set = SampleSet::from_samples(vec![sample(20, 20, 100), sample(70, 70, 0)]);
        let buffer = rasterize(&set, 100, 100, &GradientSpec::greyscale()).unwrap();

        let hot = buffer.pixel(20, 20).unwrap();
        let cold = buffer.pixel(70, 70).unwrap();
        assert_eq!(hot, [255, 255, 255, 255]);
        assert!(hot[3] > cold[3]);
        assert!(cold[3] > 0);
    }

    #[test]
    fn greymap_rgb_tracks_alpha() {
        let set = SampleSet::from_samples(vec![sample(10, 10, 50), sample(14, 12, 80)]);
        let buffer = rasterize(&set, 32, 32, &GradientSpec::greyscale()).unwrap();

        for chunk in buffer.pixels.chunks_exact(4) {
            assert_eq!(chunk[0], chunk[3]);
            assert_eq!(chunk[1], chunk[3]);
            assert_eq!(chunk[2], chunk[3]);
        }
    }

    #[test]
    fn pixels_outside_every_radius_stay_transparent() {
        let set = SampleSet::from_samples(vec![sample(5, 5, 60)]);
        let buffer = rasterize(&set, 64, 64, &GradientSpec::perceptual()).unwrap();
        assert_eq!(buffer.pixel(40, 40), Some([0, 0, 0, 0]));
    }

    #[test]
    fn overlapping_splats_accumulate() {
        let single = SampleSet::from_samples(vec![sample(10, 10, 40), sample(40, 40, 100)]);
        let stacked = SampleSet::from_samples(vec![
            sample(10, 10, 40),
            sample(12, 10, 40),
            sample(40, 40, 100),
        ]);
        let gradient = GradientSpec::greyscale();

        let a = rasterize(&single, 64, 64, &gradient).unwrap();
        let b = rasterize(&stacked, 64, 64, &gradient).unwrap();
        assert!(b.pixel(11, 10).unwrap()[3] > a.pixel(11, 10).unwrap()[3]);
    }

    #[test]
    fn duplicate_coordinates_extend_range() {
        let set = SampleSet::from_samples(vec![
            sample(8, 8, 60),
            sample(8, 8, 60),
            sample(30, 30, 99),
        ]);
        let buffer = rasterize(&set, 40, 40, &GradientSpec::greyscale()).unwrap();

        // The merged 120 becomes the normalisation peak.
        assert_eq!(buffer.pixel(8, 8).unwrap()[3], 255);
        assert!(buffer.pixel(30, 30).unwrap()[3] < 255);
    }

    #[test]
    fn flat_range_draws_full_alpha() {
        let set = SampleSet::from_samples(vec![sample(3, 3, 7)]);
        let buffer = rasterize(&set, 8, 8, &GradientSpec::greyscale()).unwrap();
        assert_eq!(buffer.pixel(3, 3).unwrap()[3], 255);
    }

    #[test]
    fn pixel_outside_buffer_is_none() {
        let buffer = RasterBuffer {
            width: 2,
            height: 3,
            pixels: vec![9; 2 * 3 * 4],
        };
        assert_eq!(buffer.pixel(1, 2), Some([9; 4]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 3), None);

        let truncated = RasterBuffer {
            width: 2,
            height: 2,
            pixels: vec![0; 4],
        };
        assert_eq!(truncated.pixel(1, 1), None);
    }

    #[test]
    fn pixel_index_does_not_wrap_in_u32() {
        // 70_000 * 70_000 * 4 exceeds u32::MAX; the lookup must reject, not wrap.
        let buffer = RasterBuffer {
            width: 70_000,
            height: 70_000,
            pixels: vec![0; 16],
        };
        assert_eq!(buffer.pixel(0, 0), Some([0; 4]));
        assert_eq!(buffer.pixel(69_999, 69_999), None);
    }

    #[test]
    fn colorize_reserves_output_and_maps_alpha() {
        let surface = ShadowSurface {
            width: 1,
            height: 1,
            alpha: vec![0.5],
        };
        let buffer = surface.colorize(&GradientSpec::greyscale().palette()).unwrap();
        assert_eq!(buffer.pixel(0, 0), Some([128, 128, 128, 128]));
        assert_eq!(buffer.pixels.len(), 4);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let set = SampleSet::from_samples(vec![sample(0, 0, 1)]);
        assert_eq!(
            rasterize(&set, 0, 10, &GradientSpec::greyscale()),
            Err(RasterError::EmptySurface {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn template_alpha_floors_minimum() {
        assert_eq!(template_alpha(0.0, 0.0, 100.0), SPLAT_MIN_ALPHA);
        assert_eq!(template_alpha(100.0, 0.0, 100.0), 1.0);
        assert!((template_alpha(25.0, 0.0, 100.0) - 0.25).abs() < 1e-6);
    }
}
