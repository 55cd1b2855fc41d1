/// Number of synthetic samples generated per rectangle
pub const SAMPLE_COUNT: usize = 200;

/// Rasterizer influence radius shared by every sample (pixels)
pub const SAMPLE_RADIUS: u32 = 10;

/// Exclusive upper bound of generated sample values
pub const SAMPLE_VALUE_LIMIT: u32 = 100;

/// Starting value for the running minimum, larger than any generated value
pub const SAMPLE_MIN_SENTINEL: u32 = 10_000;

/// Starting value for the running maximum
pub const SAMPLE_MAX_SENTINEL: u32 = 0;

/// Template blur. Alpha is solid inside `(1 - blur) * radius`, then fades out.
pub const SPLAT_BLUR: f32 = 0.85;

/// Lowest global alpha a splat is drawn with, so minimum-value samples still register
pub const SPLAT_MIN_ALPHA: f32 = 0.01;

/// Number of entries in a colorize palette
pub const PALETTE_SIZE: usize = 256;

/// Default perceptual ramp: (offset, rgb)
pub const PERCEPTUAL_GRADIENT: &[(f32, [u8; 3])] = &[
    (0.25, [0, 0, 255]),
    (0.55, [0, 255, 0]),
    (0.85, [255, 255, 0]),
    (1.0, [255, 0, 0]),
];

/// Two-stop ramp whose alpha channel drives vertex displacement
pub const GREYSCALE_GRADIENT: &[(f32, [u8; 3])] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];
