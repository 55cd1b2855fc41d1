use bevy::prelude::*;
use thiserror::Error;

use crate::engine::heatmap::surface::HeatmapSurfaceConfig;

/// Environment variable holding an optional sample RNG seed
pub const SEED_ENV_VAR: &str = "HEATMAP_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("HEATMAP_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

/// Startup settings supplied by the embedding application
#[derive(Resource, Debug, Clone, Default)]
pub struct HeatmapAppSettings {
    /// Fixed seed for reproducible samples; entropy when `None`
    pub seed: Option<u64>,
    pub surface: HeatmapSurfaceConfig,
}

impl HeatmapAppSettings {
    /// Default settings with the seed taken from the environment
    pub fn from_env() -> Result<Self, SettingsError> {
        let seed = parse_seed(std::env::var(SEED_ENV_VAR).ok().as_deref())?;
        Ok(Self { seed, ..default() })
    }
}

fn parse_seed(raw: Option<&str>) -> Result<Option<u64>, SettingsError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::InvalidSeed(value.to_string())),
    }
}
