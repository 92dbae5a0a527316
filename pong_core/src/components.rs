use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Config;

/// Which paddle an entity or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Right paddle, driven by the caller's action
    Agent,
    /// Left paddle, driven by the scripted opponent
    Opponent,
}

/// Axis-aligned rectangle (top-left corner + size), Y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Vertical centre, offset by the floored half-height like an integer rect
    pub fn center_y(&self) -> f32 {
        self.pos.y + (self.size.y / 2.0).floor()
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Paddle component - X is fixed per side, only Y moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, H - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Paddle centred vertically on its side of the arena
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(side, config.paddle_spawn_y())
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::new(
            Vec2::new(config.paddle_x(self.side), self.y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.rect(config).center_y()
    }
}

/// Ball component - position is the top-left corner of its square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the arena centre with a fresh random sign on each axis
    pub fn serve(config: &Config, signs: &mut dyn crate::SignSource) -> Self {
        let vx = config.ball_speed * signs.next_sign();
        let vy = config.ball_speed * signs.next_sign();
        Self::new(
            Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            Vec2::new(vx, vy),
        )
    }

    pub fn rect(&self, config: &Config) -> Rect {
        Rect::new(self.pos, Vec2::splat(config.ball_size))
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.rect(config).center_y()
    }
}
