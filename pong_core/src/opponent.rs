//! Policies for the left (opponent) paddle.

use crate::observation::{observe_mirrored, Observation};
use crate::{Action, Config, State};

/// Decides the opponent paddle's action each tick
pub trait Opponent {
    fn decide(&mut self, state: &State, config: &Config) -> Action;
}

/// Scripted controller: chase the ball's current vertical centre.
///
/// No prediction and no smoothing. Holds when the centres are level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackingOpponent;

impl Opponent for TrackingOpponent {
    fn decide(&mut self, state: &State, config: &Config) -> Action {
        let paddle_center = state.opponent.center_y(config);
        let ball_center = state.ball.center_y(config);

        if paddle_center < ball_center {
            Action::Down
        } else if paddle_center > ball_center {
            Action::Up
        } else {
            Action::Hold
        }
    }
}

/// Drives the opponent paddle with an external policy.
///
/// The policy receives the mirrored observation, so one trained on the
/// agent seat can be reused as-is.
pub struct PolicyOpponent<F> {
    policy: F,
}

impl<F> PolicyOpponent<F>
where
    F: FnMut(&Observation) -> Action,
{
    pub fn new(policy: F) -> Self {
        Self { policy }
    }
}

impl<F> Opponent for PolicyOpponent<F>
where
    F: FnMut(&Observation) -> Action,
{
    fn decide(&mut self, state: &State, config: &Config) -> Action {
        (self.policy)(&observe_mirrored(state, config))
    }
}
