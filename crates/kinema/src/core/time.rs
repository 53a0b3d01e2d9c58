use crate::api::config::SimConfig;

/// Turns variable frame times into a whole number of fixed ticks.
///
/// The integrator never normalizes units, so the `dt` handed out here must be
/// in the same unit the velocities and accelerations were set in.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f64,
    max_steps: u32,
    accumulator: f64,
}

impl FixedTimestep {
    /// `dt` must be positive; a zero or negative tick makes `alpha` NaN and
    /// `accumulate` meaningless.
    pub fn new(dt: f64, max_steps: u32) -> Self {
        if dt <= 0.0 {
            log::warn!("fixed timestep with non-positive dt {}", dt);
        }
        debug_assert!(dt > 0.0, "fixed timestep dt must be positive, got {dt}");
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Build from the fixed tick length and step cap in `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.fixed_dt, config.max_steps)
    }

    /// Add frame time. Returns how many fixed ticks to run; backlog beyond
    /// `max_steps` ticks is dropped.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        let cap = self.dt * self.max_steps as f64;
        self.accumulator = (self.accumulator + frame_dt).min(cap);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }

    /// Fraction of a tick left over, for interpolating between positions.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    /// The fixed delta time per tick.
    pub fn dt(&self) -> f64 {
        self.dt
    }
}
