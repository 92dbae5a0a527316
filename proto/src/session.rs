use pong_core::{GameEvent, PongEnv, Rect, RenderView, Side, StepResult};

use crate::{ProtoError, C2S, S2C};

/// Serves one kernel instance to a remote collaborator
pub struct Session {
    env: PongEnv,
}

impl Session {
    pub fn new(env: PongEnv) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &PongEnv {
        &self.env
    }

    /// Apply one command and collect the replies, in order
    pub fn handle(&mut self, msg: C2S) -> Vec<S2C> {
        match msg {
            C2S::Reset { seed } => {
                let obs = self.env.reset(seed);
                vec![S2C::Observation {
                    obs: obs.0,
                    reward: 0.0,
                    terminated: false,
                    truncated: false,
                }]
            }
            C2S::Step { action } => match self.env.step(action) {
                Ok(result) => step_replies(result),
                Err(err) => vec![S2C::Rejected {
                    reason: err.to_string(),
                }],
            },
            C2S::Render => match self.env.render() {
                Some(view) => vec![frame(&view)],
                None => vec![S2C::Rejected {
                    reason: "rendering is disabled".into(),
                }],
            },
        }
    }

    /// Decode a command, apply it and encode every reply
    pub fn handle_bytes(&mut self, bytes: &[u8]) -> Result<Vec<Vec<u8>>, ProtoError> {
        let msg = C2S::from_bytes(bytes).inspect_err(|err| {
            log::warn!("dropping undecodable command: {}", err);
        })?;
        self.handle(msg).iter().map(S2C::to_bytes).collect()
    }
}

fn step_replies(result: StepResult) -> Vec<S2C> {
    let mut replies = Vec::with_capacity(1 + result.events.len());
    replies.push(S2C::Observation {
        obs: result.observation.0,
        reward: result.reward,
        terminated: result.terminated,
        truncated: result.truncated,
    });
    replies.extend(result.events.iter().map(event));
    replies
}

fn event(event: &GameEvent) -> S2C {
    let scorer = match event {
        GameEvent::Scored(Side::Opponent) => Some(0), // left
        GameEvent::Scored(Side::Agent) => Some(1),    // right
        _ => None,
    };
    S2C::Event {
        name: event.name().to_string(),
        scorer,
    }
}

fn frame(view: &RenderView) -> S2C {
    S2C::Frame {
        agent: rect(&view.agent),
        opponent: rect(&view.opponent),
        ball: rect(&view.ball),
        score_agent: view.score.agent,
        score_opponent: view.score.opponent,
    }
}

fn rect(r: &Rect) -> [f32; 4] {
    [r.pos.x, r.pos.y, r.size.x, r.size.y]
}
