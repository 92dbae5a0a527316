use crate::{Ball, Config, Side};

/// Check if the ball reached a side boundary. Returns the side that scores.
///
/// Crossing the left edge is a point for the agent, the right edge a point
/// for the opponent. The left edge is checked first.
pub fn check_scoring(ball: &Ball, config: &Config) -> Option<Side> {
    let rect = ball.rect(config);
    if rect.left() <= 0.0 {
        Some(Side::Agent)
    } else if rect.right() >= config.arena_width {
        Some(Side::Opponent)
    } else {
        None
    }
}
