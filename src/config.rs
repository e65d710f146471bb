use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/tuning.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Drag accelerate/decelerate rate in m/s^2.
    pub acceleration: f32,
    /// Minimum pointer travel (meters) before a drag counts as movement.
    pub dead_zone: f32,
    /// Grab-to-rotate rate in degrees per meter of lateral travel.
    pub degrees_per_meter: f32,
    /// Wall snap grid spacing in meters.
    pub grid_step: f32,
    /// Depth of the fixture wall used by the headless scene, along -Z.
    pub wall_depth: f32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            acceleration: 2.0,
            dead_zone: 0.02,
            degrees_per_meter: 135.0,
            // 0.137025m grid model spacing after the 0.5714 scene scale fix
            grid_step: 0.0783,
            wall_depth: -3.0,
        }
    }
}

impl TuningConfig {
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load tuning from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<TuningConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    TuningConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Tuning config not found at {}. Using defaults",
                        path.display()
                    );
                }
                TuningConfig::default()
            }
        }
    }
}
