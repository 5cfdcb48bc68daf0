use crate::config::SimulationConfig;
use crate::core::ballistics::{Trajectory, sample_with_limit};
use crate::core::error::SolverError;

/// Solves and samples once from a finished configuration.
pub fn run(config: &SimulationConfig) -> Result<Trajectory, SolverError> {
    let params = config.launch.to_parameters();
    let result = sample_with_limit(
        params,
        config.sampling.frame_rate_hz,
        config.sampling.max_samples,
    );

    match &result {
        Ok(trajectory) if trajectory.is_empty() => {
            tracing::warn!(
                duration_s = trajectory.duration().seconds(),
                "flight too short to produce any frames"
            );
        }
        Ok(trajectory) => {
            tracing::debug!(
                duration_s = trajectory.duration().seconds(),
                frames = trajectory.len(),
                frame_rate_hz = trajectory.frame_rate_hz(),
                "trajectory sampled"
            );
        }
        Err(err) if err.is_degenerate() => {
            tracing::warn!(discriminant = params.discriminant(), "{err}");
        }
        Err(err) => tracing::debug!("{err}"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_frame_rate() {
        let mut config = SimulationConfig::default();
        config.sampling.frame_rate_hz = 30.0;

        let trajectory = run(&config).unwrap();
        assert_eq!(trajectory.frame_rate_hz(), 30.0);
        assert_eq!(trajectory.len(), 215);
    }

    #[test]
    fn surfaces_degenerate_input() {
        let mut config = SimulationConfig::default();
        config.launch.gravity_mps2 = -9.8;

        let err = run(&config).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn honours_sample_ceiling() {
        let mut config = SimulationConfig::default();
        config.sampling.max_samples = 10;

        assert!(matches!(
            run(&config),
            Err(SolverError::TooManySamples { limit: 10, .. })
        ));
    }
}
