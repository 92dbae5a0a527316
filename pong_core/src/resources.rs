use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::Side;

/// Match score. Persists across episode resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub agent: u32,    // Right paddle
    pub opponent: u32, // Left paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Agent => self.agent += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Agent => self.agent,
            Side::Opponent => self.opponent,
        }
    }

    /// Points played in the match so far
    pub fn total(&self) -> u32 {
        self.agent + self.opponent
    }
}

/// Discrete events emitted during a tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// A side scored a point
    Scored(Side),
}

impl GameEvent {
    /// Sound cue name for this event
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::WallBounce | GameEvent::PaddleHit(_) => "bounce",
            GameEvent::Scored(_) => "score",
        }
    }
}

/// Receiver for kernel events. Missing listeners are a no-op.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Source of random velocity signs
pub trait SignSource {
    /// Returns +1.0 or -1.0
    fn next_sign(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded from process entropy
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SignSource for GameRng {
    fn next_sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

/// Fixed, cycling sequence of signs (`true` = positive)
#[derive(Debug, Clone)]
pub struct SignSequence {
    signs: Vec<bool>,
    cursor: usize,
}

impl SignSequence {
    pub fn new(signs: Vec<bool>) -> Self {
        Self { signs, cursor: 0 }
    }

    /// Every draw is positive
    pub fn positive() -> Self {
        Self::new(vec![true])
    }
}

impl SignSource for SignSequence {
    fn next_sign(&mut self) -> f32 {
        if self.signs.is_empty() {
            return 1.0;
        }
        let sign = self.signs[self.cursor % self.signs.len()];
        self.cursor += 1;
        if sign {
            1.0
        } else {
            -1.0
        }
    }
}
