//! Heat-intensity surface pipeline.
//!
//! Scattered weighted samples are rasterized into a colour map and a greyscale
//! map, uploaded as textures, and fed to a shader that lifts a subdivided plane
//! by intensity and tints it by colour.

/// Synthetic weighted sample generation and value range tracking.
pub mod samples;

/// Colour ramps and 256-entry palettes for intensity colorization.
pub mod gradient;

/// Off-screen density rasterizer producing RGBA buffers from samples.
///
/// Splats blurred radial templates with source-over alpha, then maps
/// accumulated alpha through a gradient palette.
pub mod rasterizer;

/// Raster buffer to GPU image conversion.
pub mod texture_bridge;

/// Displacement shader material and its one-time registration plugin.
pub mod material;

/// Clockwise in-plane rotation of the surface origin.
pub mod placement;

/// Subdivided plane mesh generation.
pub mod mesh;

/// Surface configuration, rect-keyed texture cache and maintenance systems.
pub mod surface;
