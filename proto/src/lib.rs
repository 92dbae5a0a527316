//! Wire protocol for driving a Pong kernel from another process
//!
//! Uses postcard for efficient binary serialization

use postcard::{from_bytes, to_allocvec};

mod session;

pub use session::Session;

/// Errors raised while encoding or decoding wire messages
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    #[error("failed to decode message: {0}")]
    Decode(postcard::Error),

    #[error("failed to encode message: {0}")]
    Encode(postcard::Error),
}

// ============================================================================
// C2S Messages (Collaborator to Simulation)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum C2S {
    /// Start a new episode, optionally reseeding the ball serve
    Reset { seed: Option<u64> },

    /// Advance one tick: 0 = hold, 1 = up, 2 = down
    Step { action: i64 },

    /// Request the current frame
    Render,
}

// ============================================================================
// S2C Messages (Simulation to Collaborator)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum S2C {
    /// Observation after a reset or step
    Observation {
        obs: [f32; 5],
        reward: f32,
        terminated: bool,
        truncated: bool,
    },

    /// Drawable state, all rectangles as (x, y, w, h)
    Frame {
        agent: [f32; 4],
        opponent: [f32; 4],
        ball: [f32; 4],
        score_agent: u32,
        score_opponent: u32,
    },

    /// Sound cue: "bounce" or "score"
    Event { name: String, scorer: Option<u8> },

    /// Command refused; kernel state unchanged
    Rejected { reason: String },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}

impl S2C {
    /// Serialize S2C message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    /// Deserialize S2C message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}
