/// Match policy constants
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Stall detection
    pub const STALL_SPEED: f32 = 0.05; // speed floor below which a ball counts as stalled
    pub const STALL_TIMEOUT: f32 = 3.0; // seconds below the floor before a forced respawn

    // Paddle
    pub const PADDLE_SPEED: f32 = 18.0; // units per second at full intent
    pub const PADDLE_HALF_HEIGHT: f32 = 2.0;
}
