//! The kernel instance driven by external collaborators.

use serde::{Deserialize, Serialize};

use crate::observation::{observe, Observation, OBS_SIZE};
use crate::{
    Action, Config, ConfigError, EnvConfig, EnvError, EventSink, GameEvent, GameRng, NullSink,
    Opponent, Rect, Score, SignSource, State, TrackingOpponent,
};

/// What `step` hands back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    /// Always false from the kernel; time limits are applied by wrappers
    pub truncated: bool,
    pub events: Vec<GameEvent>,
}

/// Read-only snapshot for drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderView {
    pub agent: Rect,
    pub opponent: Rect,
    pub ball: Rect,
    pub score: Score,
    /// X of the centre line
    pub net_x: f32,
    pub arena_width: f32,
    pub arena_height: f32,
}

impl RenderView {
    pub fn capture(state: &State, config: &Config) -> Self {
        Self {
            agent: state.agent.rect(config),
            opponent: state.opponent.rect(config),
            ball: state.ball.rect(config),
            score: state.score,
            net_x: config.arena_width / 2.0,
            arena_width: config.arena_width,
            arena_height: config.arena_height,
        }
    }
}

/// Reset/step interface shared by the kernel and its wrappers
pub trait Env {
    fn reset(&mut self, seed: Option<u64>) -> Observation;

    fn step(&mut self, action: i64) -> Result<StepResult, EnvError>;

    fn obs_size(&self) -> usize {
        OBS_SIZE
    }

    fn action_size(&self) -> usize {
        Action::COUNT
    }
}

/// Pong kernel: owns the state, the opponent policy and the sign source.
///
/// Each instance is independent. Run several for parallel collection.
pub struct PongEnv {
    config: EnvConfig,
    state: State,
    signs: Box<dyn SignSource + Send>,
    opponent: Box<dyn Opponent + Send>,
    sink: Box<dyn EventSink + Send>,
}

impl PongEnv {
    /// Validate `config` and build a kernel seeded from process entropy
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Box::new(GameRng::from_entropy())))
    }

    /// Validate `config` and build a kernel with a seeded sign source
    pub fn with_seed(config: EnvConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Box::new(GameRng::new(seed))))
    }

    fn build(config: EnvConfig, mut signs: Box<dyn SignSource + Send>) -> Self {
        let state = State::new(&config.rules, signs.as_mut());
        Self {
            config,
            state,
            signs,
            opponent: Box::new(TrackingOpponent),
            sink: Box::new(NullSink),
        }
    }

    /// Replace the scripted opponent
    pub fn with_opponent(mut self, opponent: impl Opponent + Send + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// Register a listener for sound cues
    pub fn with_sink(mut self, sink: impl EventSink + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the source of ball velocity signs and re-serve
    pub fn with_sign_source(mut self, signs: impl SignSource + Send + 'static) -> Self {
        self.signs = Box::new(signs);
        self.state = State::new(&self.config.rules, self.signs.as_mut());
        self
    }

    /// Start a new episode. A seed reseeds the sign source first.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.signs = Box::new(GameRng::new(seed));
        }
        self.state = self.state.reset(&self.config.rules, self.signs.as_mut());
        log::debug!(
            "episode {} reset (seed: {:?}, score {}-{})",
            self.state.episode,
            seed,
            self.state.score.agent,
            self.state.score.opponent
        );
        self.observe()
    }

    /// Validate a raw action and advance one tick.
    ///
    /// An invalid action is rejected before any state changes.
    pub fn step(&mut self, action: i64) -> Result<StepResult, EnvError> {
        let action = Action::try_from(action).map_err(|err| {
            log::warn!("rejected tick: {}", err);
            err
        })?;
        Ok(self.step_action(action))
    }

    /// Advance one tick with an already-valid action
    pub fn step_action(&mut self, action: Action) -> StepResult {
        let outcome = crate::step(
            &self.state,
            action,
            self.opponent.as_mut(),
            &self.config.rules,
            &self.config.reward,
            self.signs.as_mut(),
        );
        self.state = outcome.state;

        if self.config.options.sound_enabled {
            for event in &outcome.events {
                self.sink.emit(*event);
            }
        }

        log::trace!(
            "tick {} action {:?} reward {:.4}",
            self.state.tick,
            action,
            outcome.reward
        );
        if outcome.terminated {
            log::debug!(
                "point scored on tick {}, score {}-{}",
                self.state.tick,
                self.state.score.agent,
                self.state.score.opponent
            );
        }

        StepResult {
            observation: self.observe(),
            reward: outcome.reward,
            terminated: outcome.terminated,
            truncated: false,
            events: outcome.events,
        }
    }

    pub fn observe(&self) -> Observation {
        observe(&self.state)
    }

    /// Frame data for a renderer, or `None` when rendering is disabled
    pub fn render(&self) -> Option<RenderView> {
        self.config
            .options
            .render_enabled
            .then(|| RenderView::capture(&self.state, &self.config.rules))
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn episode(&self) -> u64 {
        self.state.episode
    }

    pub fn tick(&self) -> u64 {
        self.state.tick
    }
}

impl Default for PongEnv {
    fn default() -> Self {
        Self::build(EnvConfig::default(), Box::new(GameRng::from_entropy()))
    }
}

impl Env for PongEnv {
    fn reset(&mut self, seed: Option<u64>) -> Observation {
        PongEnv::reset(self, seed)
    }

    fn step(&mut self, action: i64) -> Result<StepResult, EnvError> {
        PongEnv::step(self, action)
    }
}
