use super::ballistics::{Trajectory, TrajectorySample};

/// Real-time cursor over a trajectory: frame i shows sample i.
#[derive(Clone, Debug)]
pub struct Playback {
    trajectory: Trajectory,
    frame: usize,
    accumulated_s: f64,
    paused: bool,
}

impl Playback {
    pub fn new(trajectory: Trajectory) -> Self {
        Self {
            trajectory,
            frame: 0,
            accumulated_s: 0.0,
            paused: false,
        }
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn frame_interval_s(&self) -> f64 {
        1.0 / self.trajectory.frame_rate_hz()
    }

    /// Moves forward by `dt_s` seconds of wall time. Returns true if the frame changed.
    pub fn advance(&mut self, dt_s: f64) -> bool {
        if self.paused || self.is_finished() || dt_s.is_nan() || dt_s <= 0.0 {
            return false;
        }

        self.accumulated_s += dt_s;
        let interval = self.frame_interval_s();
        let steps = (self.accumulated_s / interval).floor();
        if steps < 1.0 {
            return false;
        }

        self.accumulated_s -= steps * interval;
        let last = self.trajectory.len() - 1;
        let remaining = (last - self.frame) as f64;
        self.frame += steps.min(remaining) as usize;
        true
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn current(&self) -> Option<&TrajectorySample> {
        self.trajectory.get(self.frame)
    }

    /// Samples already traversed, current one included.
    pub fn trail(&self) -> &[TrajectorySample] {
        let samples = self.trajectory.samples();
        if samples.is_empty() {
            return samples;
        }
        &samples[..=self.frame]
    }

    /// Nothing left to show: last frame reached, or there were no frames.
    pub fn is_finished(&self) -> bool {
        self.trajectory.len() <= self.frame + 1
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn restart(&mut self) {
        self.frame = 0;
        self.accumulated_s = 0.0;
        self.paused = false;
    }
}
