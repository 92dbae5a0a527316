use crate::{Ball, Config, Paddle, Side};

/// Flip vertical velocity if the ball touches the top or bottom wall.
/// Returns the new ball and whether it bounced.
pub fn bounce_walls(ball: Ball, config: &Config) -> (Ball, bool) {
    let rect = ball.rect(config);
    if rect.top() <= 0.0 || rect.bottom() >= config.arena_height {
        let mut vel = ball.vel;
        vel.y = -vel.y;
        (Ball { vel, ..ball }, true)
    } else {
        (ball, false)
    }
}

/// Bounce the ball off at most one paddle, agent first.
///
/// The ball is snapped flush against the paddle face it hit and its
/// horizontal velocity is reversed. Returns the side that was hit.
pub fn resolve_paddles(
    ball: Ball,
    agent: &Paddle,
    opponent: &Paddle,
    config: &Config,
) -> (Ball, Option<Side>) {
    let ball_rect = ball.rect(config);

    let agent_rect = agent.rect(config);
    if ball_rect.intersects(&agent_rect) {
        let mut pos = ball.pos;
        pos.x = agent_rect.left() - config.ball_size;
        let mut vel = ball.vel;
        vel.x = -vel.x;
        return (Ball { pos, vel }, Some(Side::Agent));
    }

    let opponent_rect = opponent.rect(config);
    if ball_rect.intersects(&opponent_rect) {
        let mut pos = ball.pos;
        pos.x = opponent_rect.right();
        let mut vel = ball.vel;
        vel.x = -vel.x;
        return (Ball { pos, vel }, Some(Side::Opponent));
    }

    (ball, None)
}
