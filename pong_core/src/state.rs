//! Kernel state: both paddles, the ball and the match score.
//!
//! `State` is a plain value. The stepper never mutates one in place; it
//! builds the next state from the previous one.

use serde::{Deserialize, Serialize};

use crate::{Ball, Config, Paddle, Score, Side, SignSource};

/// Episode phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Rally in progress
    Running,
    /// A point was scored on the last tick
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub agent: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: Phase,
    /// Ticks since the current episode started
    pub tick: u64,
    /// Episodes started since construction (1 after the first reset)
    pub episode: u64,
}

impl State {
    /// Fresh state with a zero score
    pub fn new(config: &Config, signs: &mut dyn SignSource) -> Self {
        Self {
            agent: Paddle::spawn(Side::Agent, config),
            opponent: Paddle::spawn(Side::Opponent, config),
            ball: Ball::serve(config, signs),
            score: Score::new(),
            phase: Phase::Running,
            tick: 0,
            episode: 1,
        }
    }

    /// Start a new episode: paddles and ball re-centred, score carried over
    pub fn reset(&self, config: &Config, signs: &mut dyn SignSource) -> Self {
        Self {
            score: self.score,
            episode: self.episode + 1,
            ..Self::new(config, signs)
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }
}
