pub mod action;
pub mod components;
pub mod config;
pub mod env;
pub mod error;
pub mod observation;
pub mod opponent;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;
pub mod wrappers;

pub use action::*;
pub use components::*;
pub use config::*;
pub use env::*;
pub use error::*;
pub use observation::*;
pub use opponent::*;
pub use params::*;
pub use resources::*;
pub use state::*;
pub use wrappers::*;

use systems::*;

/// Result of advancing a `State` by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: State,
    pub reward: f32,
    pub terminated: bool,
    pub events: Vec<GameEvent>,
}

/// Run one deterministic Pong tick.
///
/// Phases run in a fixed order: agent paddle, opponent paddle, ball
/// translation, wall bounce, paddle collision, scoring and reward. The input
/// state is left untouched; the next state is returned by value.
pub fn step(
    state: &State,
    action: Action,
    opponent: &mut dyn Opponent,
    config: &Config,
    reward_config: &RewardConfig,
    signs: &mut dyn SignSource,
) -> TickOutcome {
    let mut events = Vec::new();
    let mut next = *state;

    // 1. Agent paddle
    next.agent = apply_action(state.agent, action, config);

    // 2. Opponent paddle
    let opponent_action = opponent.decide(&next, config);
    next.opponent = apply_action(state.opponent, opponent_action, config);

    // 3. Ball translation
    let ball = move_ball(state.ball);

    // 4. Top/bottom walls
    let (ball, wall_bounce) = bounce_walls(ball, config);
    if wall_bounce {
        events.push(GameEvent::WallBounce);
    }

    // 5. Paddles (agent first, at most one)
    let (ball, paddle_hit) = resolve_paddles(ball, &next.agent, &next.opponent, config);
    if let Some(side) = paddle_hit {
        events.push(GameEvent::PaddleHit(side));
    }
    next.ball = ball;

    // 6. Scoring and reward
    let reward = match check_scoring(&next.ball, config) {
        Some(scorer) => {
            next.score.increment(scorer);
            next.ball = Ball::serve(config, signs);
            next.phase = Phase::Terminal;
            events.push(GameEvent::Scored(scorer));
            score_reward(scorer, reward_config)
        }
        None => {
            next.phase = Phase::Running;
            shaping_reward(
                &next.agent,
                &next.ball,
                action,
                paddle_hit == Some(Side::Agent),
                config,
                reward_config,
            )
        }
    };
    next.tick += 1;

    TickOutcome {
        state: next,
        reward,
        terminated: next.is_terminal(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (State, Config, RewardConfig, SignSequence) {
        let config = Config::new();
        let mut signs = SignSequence::positive();
        let state = State::new(&config, &mut signs);
        (state, config, RewardConfig::default(), signs)
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let (state, config, reward, mut signs) = setup();
        let before = state;
        let outcome = step(
            &state,
            Action::Up,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert_eq!(state, before);
        assert_ne!(outcome.state, before);
        assert_eq!(outcome.state.tick, 1);
    }

    #[test]
    fn test_opponent_tracks_ball_each_tick() {
        let (mut state, config, reward, mut signs) = setup();
        state.ball = Ball::new(Vec2::new(400.0, 500.0), Vec2::new(5.0, 5.0));

        let outcome = step(
            &state,
            Action::Hold,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert_eq!(outcome.state.opponent.y, 256.0, "Opponent moved down");
        assert_eq!(outcome.state.agent.y, 250.0, "Agent held");
    }

    #[test]
    fn test_opponent_scores_on_right_exit() {
        let (mut state, config, reward, mut signs) = setup();
        state.ball = Ball::new(Vec2::new(795.0, 100.0), Vec2::new(5.0, 5.0));

        let outcome = step(
            &state,
            Action::Hold,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert!(outcome.terminated);
        assert_eq!(outcome.reward, -1.0);
        assert_eq!(outcome.state.score.opponent, 1);
        assert_eq!(outcome.state.score.agent, 0);
        assert_eq!(outcome.state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(outcome.state.phase, Phase::Terminal);
        assert_eq!(outcome.events, vec![GameEvent::Scored(Side::Opponent)]);
    }

    #[test]
    fn test_agent_scores_on_left_exit() {
        let (mut state, config, reward, mut signs) = setup();
        state.ball = Ball::new(Vec2::new(3.0, 500.0), Vec2::new(-5.0, 5.0));

        let outcome = step(
            &state,
            Action::Down,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert!(outcome.terminated);
        assert_eq!(outcome.reward, 1.0, "Win reward replaces shaping terms");
        assert_eq!(outcome.state.score.agent, 1);
    }

    #[test]
    fn test_agent_hit_reward_and_event() {
        let (mut state, config, reward, mut signs) = setup();
        // Lands overlapping the agent paddle after one tick
        state.ball = Ball::new(Vec2::new(763.0, 285.0), Vec2::new(5.0, 5.0));

        let outcome = step(
            &state,
            Action::Hold,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert!(!outcome.terminated);
        assert_eq!(outcome.events, vec![GameEvent::PaddleHit(Side::Agent)]);
        assert_eq!(outcome.state.ball.pos, Vec2::new(765.0, 290.0));
        assert_eq!(outcome.state.ball.vel, Vec2::new(-5.0, 5.0));

        // Ball centre 297, paddle centre 300
        let expected = 0.1 + 0.001 - 0.01 * (3.0 / 600.0);
        assert!((outcome.reward - expected).abs() < 1e-6);
    }

    #[test]
    fn test_opponent_holds_when_centres_level() {
        let (mut state, config, reward, mut signs) = setup();
        // The opponent decides before the ball moves: centre 293 + 7 = 300
        state.ball = Ball::new(Vec2::new(400.0, 293.0), Vec2::new(5.0, 5.0));
        assert_eq!(state.opponent.y, 250.0);

        let outcome = step(
            &state,
            Action::Hold,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert_eq!(outcome.state.opponent.y, 250.0, "Level centres mean hold");
    }

    #[test]
    fn test_aligned_hold_tick_reward() {
        let (mut state, config, reward, mut signs) = setup();
        // Lands at y = 293 so both centres sit at 300
        state.ball = Ball::new(Vec2::new(400.0, 288.0), Vec2::new(5.0, 5.0));

        let outcome = step(
            &state,
            Action::Hold,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert_eq!(outcome.state.ball.pos.y, 293.0);
        assert!((outcome.reward - 0.001).abs() < 1e-7, "got {}", outcome.reward);
    }

    #[test]
    fn test_wall_bounce_event() {
        let (mut state, config, reward, mut signs) = setup();
        state.ball = Ball::new(Vec2::new(400.0, 3.0), Vec2::new(5.0, -5.0));

        let outcome = step(
            &state,
            Action::Hold,
            &mut TrackingOpponent,
            &config,
            &reward,
            &mut signs,
        );
        assert_eq!(outcome.events, vec![GameEvent::WallBounce]);
        assert_eq!(outcome.state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(outcome.state.ball.pos, Vec2::new(405.0, -2.0));
    }
}
