/// Colour ramps mapping normalised intensity to RGB
use constants::heatmap::{GREYSCALE_GRADIENT, PALETTE_SIZE, PERCEPTUAL_GRADIENT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: [u8; 3],
}

/// Ordered colour stops over `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: Vec<GradientStop>,
}

impl GradientSpec {
    /// Build from `(offset, rgb)` pairs. Offsets are clamped to `[0, 1]` and sorted.
    pub fn new(stops: &[(f32, [u8; 3])]) -> Self {
        let mut stops: Vec<GradientStop> = stops
            .iter()
            .map(|&(offset, color)| GradientStop {
                offset: offset.clamp(0.0, 1.0),
                color,
            })
            .collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));

        Self { stops }
    }

    /// Blue, green, yellow, red ramp used for the visible colour map
    pub fn perceptual() -> Self {
        Self::new(PERCEPTUAL_GRADIENT)
    }

    /// Black to white ramp used for the displacement map
    pub fn greyscale() -> Self {
        Self::new(GREYSCALE_GRADIENT)
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Colour at normalised intensity `t`
    pub fn color_at(&self, t: f32) -> [u8; 3] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0, 0, 0];
        };

        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                let w = if span > 0.0 { (t - lo.offset) / span } else { 1.0 };
                return lerp_rgb(lo.color, hi.color, w);
            }
        }

        last.color
    }

    /// 256-entry lookup table indexed by quantised alpha
    pub fn palette(&self) -> [[u8; 3]; PALETTE_SIZE] {
        let mut palette = [[0u8; 3]; PALETTE_SIZE];
        let last = (PALETTE_SIZE - 1) as f32;

        for (i, entry) in palette.iter_mut().enumerate() {
            *entry = self.color_at(i as f32 / last);
        }

        palette
    }
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self::perceptual()
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], w: f32) -> [u8; 3] {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * w).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greyscale_palette_is_identity_ramp() {
        let palette = GradientSpec::greyscale().palette();
        for (i, rgb) in palette.iter().enumerate() {
            assert_eq!(*rgb, [i as u8; 3]);
        }
    }

    #[test]
    fn perceptual_ramp_pads_and_hits_stops() {
        let gradient = GradientSpec::perceptual();
        assert_eq!(gradient.color_at(0.0), [0, 0, 255]);
        assert_eq!(gradient.color_at(0.25), [0, 0, 255]);
        assert_eq!(gradient.color_at(0.55), [0, 255, 0]);
        assert_eq!(gradient.color_at(0.85), [255, 255, 0]);
        assert_eq!(gradient.color_at(1.0), [255, 0, 0]);
    }

    #[test]
    fn interpolates_between_stops() {
        let gradient = GradientSpec::new(&[(0.0, [0, 0, 0]), (1.0, [200, 100, 50])]);
        assert_eq!(gradient.color_at(0.5), [100, 50, 25]);
    }

    #[test]
    fn unsorted_and_out_of_range_stops_are_normalised() {
        let gradient = GradientSpec::new(&[(1.5, [255, 255, 255]), (-1.0, [0, 0, 0])]);
        let offsets: Vec<f32> = gradient.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 1.0]);
    }

    #[test]
    fn empty_gradient_is_black() {
        assert_eq!(GradientSpec::new(&[]).color_at(0.7), [0, 0, 0]);
    }
}
