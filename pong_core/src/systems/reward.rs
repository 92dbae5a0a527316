use crate::{Action, Ball, Config, Paddle, RewardConfig, Side};

/// Terminal reward for a scoring tick. Replaces any shaping terms.
pub fn score_reward(scorer: Side, reward: &RewardConfig) -> f32 {
    match scorer {
        Side::Agent => reward.win,
        Side::Opponent => reward.loss,
    }
}

/// Reward for a tick on which nobody scored.
///
/// Hit bonus (if the agent returned the ball), plus the survival bonus,
/// minus the alignment penalty on normalized vertical distance, minus the
/// movement cost for any action other than hold.
pub fn shaping_reward(
    agent: &Paddle,
    ball: &Ball,
    action: Action,
    agent_hit: bool,
    config: &Config,
    reward: &RewardConfig,
) -> f32 {
    let mut total = if agent_hit { reward.hit_bonus } else { 0.0 };
    total += reward.survival_bonus;

    let distance = (agent.center_y(config) - ball.center_y(config)).abs();
    total -= reward.alignment_weight * (distance / config.arena_height);

    if action != Action::Hold {
        total -= reward.move_cost;
    }
    total
}
