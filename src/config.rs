//! Simulation settings loaded from a TOML file.
//!
//! ```toml
//! [launch]
//! x0_m = 0.0
//! y0_m = 100.0
//! speed_mps = 30.0
//! angle_deg = 45.0
//! gravity_mps2 = 9.80665
//!
//! [sampling]
//! frame_rate_hz = 60.0
//! max_samples = 1000000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ballistics::{DEFAULT_MAX_SAMPLES, LaunchParameters, STANDARD_GRAVITY_MPS2};
use crate::error::{Error, Result};

pub const DEFAULT_FRAME_RATE_HZ: f64 = 60.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub launch: LaunchInputs,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// Launch values as a user enters them: angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchInputs {
    pub x0_m: f64,
    pub y0_m: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

impl Default for LaunchInputs {
    fn default() -> Self {
        Self {
            x0_m: 0.0,
            y0_m: 100.0,
            speed_mps: 30.0,
            angle_deg: 45.0,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
        }
    }
}

impl LaunchInputs {
    pub fn to_parameters(self) -> LaunchParameters {
        LaunchParameters::from_degrees(
            self.x0_m,
            self.y0_m,
            self.speed_mps,
            self.angle_deg,
            self.gravity_mps2,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Samples per second of flight, also the playback rate.
    pub frame_rate_hz: f64,
    pub max_samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl SimulationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Only sampling is checked; launch values are taken as given.
    pub fn validate(&self) -> Result<()> {
        let rate = self.sampling.frame_rate_hz;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::Config(format!(
                "sampling.frame_rate_hz must be positive, got {rate}"
            )));
        }
        if self.sampling.max_samples == 0 {
            return Err(Error::Config(
                "sampling.max_samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_launch_form() {
        let config = SimulationConfig::default();

        assert_eq!(config.launch.y0_m, 100.0);
        assert_eq!(config.launch.speed_mps, 30.0);
        assert_eq!(config.launch.angle_deg, 45.0);
        assert_eq!(config.launch.gravity_mps2, 9.80665);
        assert_eq!(config.sampling.frame_rate_hz, 60.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [launch]
            speed_mps = 12.5
            angle_deg = 60.0
            "#,
        )
        .unwrap();

        assert_eq!(config.launch.speed_mps, 12.5);
        assert_eq!(config.launch.angle_deg, 60.0);
        assert_eq!(config.launch.y0_m, 100.0);
        assert_eq!(config.sampling, SamplingConfig::default());
    }

    #[test]
    fn rejects_non_positive_frame_rate() {
        let err = SimulationConfig::from_toml_str("[sampling]\nframe_rate_hz = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("frame_rate_hz"));
    }

    #[test]
    fn converts_degrees_to_radians() {
        let inputs = LaunchInputs {
            angle_deg: 180.0,
            ..Default::default()
        };
        let params = inputs.to_parameters();
        assert!((params.angle_rad - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("projectile.toml");
        let mut config = SimulationConfig::default();
        config.launch.gravity_mps2 = 1.62;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = SimulationConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_names_path() {
        let err = SimulationConfig::load(Path::new("/nonexistent/projectile.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/projectile.toml"));
    }
}
