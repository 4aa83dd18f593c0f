/// Default tuning values for a paddle and its display
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_X: f32 = 10.0;
    pub const PADDLE_Y: f32 = 10.0;
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: i32 = 10; // pixels per move step

    // Display
    pub const DISPLAY_WIDTH: f32 = 1280.0;
    pub const LOGICAL_CAMERA_WIDTH: f32 = 640.0;
    pub const MAX_Y: f32 = 2000.0; // upper bound applied on every update

    // Assets
    pub const PLAYER_ONE_SKIN: &str = "assets/player_one.png";
    pub const PLAYER_TWO_SKIN: &str = "assets/player_two.png";
}
