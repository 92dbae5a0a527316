/// Rule constants for the two-paddle Pong kernel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between arena edge and paddle
    pub const PADDLE_SPEED: f32 = 6.0; // units per tick

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 5.0; // per axis, units per tick

    // Reward
    pub const REWARD_HIT: f32 = 0.1;
    pub const REWARD_WIN: f32 = 1.0;
    pub const REWARD_LOSS: f32 = -1.0;
    pub const REWARD_SURVIVAL: f32 = 0.001;
    pub const REWARD_ALIGNMENT: f32 = 0.01;
    pub const REWARD_MOVE_COST: f32 = 0.005;

    // Observation
    pub const OBS_VELOCITY_BOUND: f32 = 10.0;
}
