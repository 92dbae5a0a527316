//! Observation encoding.
//!
//! `[ball.x, ball.y, ball.vx, ball.vy, agent_paddle.y]` as `f32`.

use serde::{Deserialize, Serialize};

use crate::error::ObservationError;
use crate::params::Params;
use crate::{Config, State};

pub const OBS_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f32; OBS_SIZE]);

impl Observation {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }

    pub fn ball_x(&self) -> f32 {
        self.0[0]
    }

    pub fn ball_y(&self) -> f32 {
        self.0[1]
    }

    pub fn ball_vx(&self) -> f32 {
        self.0[2]
    }

    pub fn ball_vy(&self) -> f32 {
        self.0[3]
    }

    pub fn paddle_y(&self) -> f32 {
        self.0[4]
    }
}

impl TryFrom<&[f32]> for Observation {
    type Error = ObservationError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; OBS_SIZE] = values.try_into().map_err(|_| ObservationError::Shape {
            expected: OBS_SIZE,
            actual: values.len(),
        })?;
        Ok(Observation(array))
    }
}

impl From<Observation> for Vec<f32> {
    fn from(obs: Observation) -> Self {
        obs.to_vec()
    }
}

/// Observation from the agent (right paddle) seat
pub fn observe(state: &State) -> Observation {
    Observation([
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y,
        state.agent.y,
    ])
}

/// Observation from the opponent (left paddle) seat, mirrored horizontally so
/// a policy trained on the right paddle sees the same geometry.
pub fn observe_mirrored(state: &State, config: &Config) -> Observation {
    Observation([
        config.arena_width - state.ball.pos.x - config.ball_size,
        state.ball.pos.y,
        -state.ball.vel.x,
        state.ball.vel.y,
        state.opponent.y,
    ])
}

/// Nominal bounds of each observation component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub low: [f32; OBS_SIZE],
    pub high: [f32; OBS_SIZE],
}

impl ObservationSpace {
    pub fn new(config: &Config) -> Self {
        let high = [
            config.arena_width,
            config.arena_height,
            Params::OBS_VELOCITY_BOUND,
            Params::OBS_VELOCITY_BOUND,
            config.arena_height,
        ];
        Self {
            low: high.map(|v| -v),
            high,
        }
    }

    pub fn contains(&self, obs: &Observation) -> bool {
        obs.0
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}
