/// Synthetic weighted sample generation for the density rasterizer
use constants::heatmap::{
    SAMPLE_COUNT, SAMPLE_MAX_SENTINEL, SAMPLE_MIN_SENTINEL, SAMPLE_RADIUS, SAMPLE_VALUE_LIMIT,
};
use rand::Rng;

/// Single weighted point in rectangle-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub x: u32,
    pub y: u32,
    pub radius: u32,
    pub value: u32,
}

/// Samples plus the value range used for intensity normalisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    pub samples: Vec<Sample>,
    pub max: u32,
    pub min: u32,
}

impl SampleSet {
    /// Build a set, computing the running max/min over sample values
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        let (max, min) = samples.iter().fold(
            (SAMPLE_MAX_SENTINEL, SAMPLE_MIN_SENTINEL),
            |(max, min), sample| (max.max(sample.value), min.min(sample.value)),
        );

        Self { samples, max, min }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

/// Generate the synthetic sample set for a `width` x `height` rectangle.
///
/// Degenerate rectangles yield an empty set; callers must not rasterize it.
pub fn generate<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> SampleSet {
    if width == 0 || height == 0 {
        return SampleSet::from_samples(Vec::new());
    }

    let samples = (0..SAMPLE_COUNT)
        .map(|_| {
            let value = rng.gen_range(0..SAMPLE_VALUE_LIMIT);
            Sample {
                x: rng.gen_range(0..width),
                y: rng.gen_range(0..height),
                radius: SAMPLE_RADIUS,
                value,
            }
        })
        .collect();

    SampleSet::from_samples(samples)
}
