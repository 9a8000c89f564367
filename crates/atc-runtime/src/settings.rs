//! Tick cadence configuration shared by every runner.

use atc_core::{AgentRng, Bounds, RangeError};

/// How fast simulated time advances and how hard the loop is paced.
///
/// The two are independent: `time_step` scales the physics inside a tick,
/// `sleep_time` is the real-time pause after it.  A zero `sleep_time` runs
/// the loop as fast as the host allows.
#[derive(Clone, Debug)]
pub struct TickSettings {
    time_step:  f32,
    sleep_time: f32,
    seed:       Option<u64>,
}

impl TickSettings {
    /// Validates `time_step` against (0, 10] and `sleep_time` against
    /// [0, 10], both in seconds.  A negative `sleep_time` asks for real-time
    /// pacing and is replaced by `time_step`.
    pub fn new(time_step: f32, sleep_time: f32) -> Result<Self, RangeError> {
        let time_step = Bounds::closed_right(0.0, 10.0).check("time step", time_step)?;
        let sleep_time = if sleep_time < 0.0 {
            time_step
        } else {
            Bounds::closed(0.0, 10.0).check("sleep time", sleep_time)?
        };
        Ok(TickSettings { time_step, sleep_time, seed: None })
    }

    /// Pin the runner's random stream for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    pub fn sleep_time(&self) -> f32 {
        self.sleep_time
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn rng(&self) -> AgentRng {
        match self.seed {
            Some(seed) => AgentRng::seeded(seed),
            None => AgentRng::from_entropy(),
        }
    }
}
