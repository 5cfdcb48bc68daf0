use std::path::PathBuf;

use clap::Args;

use crate::config::SimulationConfig;
use crate::error::Result;

/// Launch flags shared by the CLI and the viewer. Unset flags fall back to
/// the config file, then to the built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct LaunchArgs {
    /// Initial horizontal position (m)
    #[arg(long, allow_hyphen_values = true)]
    pub x0: Option<f64>,

    /// Initial height above ground (m)
    #[arg(long, allow_hyphen_values = true)]
    pub y0: Option<f64>,

    /// Initial speed (m/s)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub speed: Option<f64>,

    /// Launch angle above horizontal (degrees)
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short = 'g', long, allow_hyphen_values = true)]
    pub gravity: Option<f64>,

    /// Frames per second of flight time
    #[arg(long)]
    pub fps: Option<f64>,

    /// TOML file with [launch] and [sampling] tables
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl LaunchArgs {
    pub fn resolve(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_to(&self, config: &mut SimulationConfig) {
        let launch = &mut config.launch;
        if let Some(v) = self.x0 {
            launch.x0_m = v;
        }
        if let Some(v) = self.y0 {
            launch.y0_m = v;
        }
        if let Some(v) = self.speed {
            launch.speed_mps = v;
        }
        if let Some(v) = self.angle {
            launch.angle_deg = v;
        }
        if let Some(v) = self.gravity {
            launch.gravity_mps2 = v;
        }
        if let Some(v) = self.fps {
            config.sampling.frame_rate_hz = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        launch: LaunchArgs,
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moon.toml");
        std::fs::write(&path, "[launch]\ngravity_mps2 = 1.62\nangle_deg = 30.0\n").unwrap();

        let cli = TestCli::parse_from([
            "test",
            "--config",
            path.to_str().unwrap(),
            "--angle",
            "60",
            "--y0",
            "-5",
        ]);
        let config = cli.launch.resolve().unwrap();

        assert_eq!(config.launch.gravity_mps2, 1.62);
        assert_eq!(config.launch.angle_deg, 60.0);
        assert_eq!(config.launch.y0_m, -5.0);
        assert_eq!(config.launch.speed_mps, 30.0);
    }

    #[test]
    fn rejects_zero_fps() {
        let cli = TestCli::parse_from(["test", "--fps", "0"]);
        assert!(cli.launch.resolve().is_err());
    }
}
