use crate::env::{Env, StepResult};
use crate::{EnvError, Observation};

/// Truncates episodes after a fixed number of ticks.
///
/// The wrapped kernel never truncates on its own; this is where a time
/// limit belongs.
pub struct TimeLimit<E> {
    env: E,
    max_ticks: u64,
    elapsed: u64,
}

impl<E: Env> TimeLimit<E> {
    pub fn new(env: E, max_ticks: u64) -> Self {
        Self {
            env,
            max_ticks,
            elapsed: 0,
        }
    }

    pub fn inner(&self) -> &E {
        &self.env
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_inner(self) -> E {
        self.env
    }

    /// Ticks taken since the last reset
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}

impl<E: Env> Env for TimeLimit<E> {
    fn reset(&mut self, seed: Option<u64>) -> Observation {
        self.elapsed = 0;
        self.env.reset(seed)
    }

    fn step(&mut self, action: i64) -> Result<StepResult, EnvError> {
        let mut result = self.env.step(action)?;
        self.elapsed += 1;
        if !result.terminated && self.elapsed >= self.max_ticks {
            result.truncated = true;
        }
        Ok(result)
    }

    fn obs_size(&self) -> usize {
        self.env.obs_size()
    }

    fn action_size(&self) -> usize {
        self.env.action_size()
    }
}
