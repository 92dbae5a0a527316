use crate::{Action, Ball, Config, Paddle};

/// Move a paddle by one tick of `action`, then clamp to the arena
pub fn apply_action(paddle: Paddle, action: Action, config: &Config) -> Paddle {
    let rect = paddle.rect(config);
    let can_move = match action {
        Action::Hold => false,
        Action::Up => rect.top() > 0.0,
        Action::Down => rect.bottom() < config.arena_height,
    };
    let y = if can_move {
        paddle.y + action.dir() * config.paddle_speed
    } else {
        paddle.y
    };

    Paddle {
        y: config.clamp_paddle_y(y),
        ..paddle
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: Ball) -> Ball {
    Ball {
        pos: ball.pos + ball.vel,
        ..ball
    }
}
