//! Block Racer - a falling-block dodge-and-match arcade game
//!
//! Core modules:
//! - `sim`: Simulation (shapes, entities, collisions, game state, tick)
//! - `renderer`: Frame rendering onto a drawing surface
//! - `platform`: Drawing surface / alert abstraction
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `settings`: Runtime tunables

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use platform::Surface;
pub use settings::{ConfigError, Settings};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Canvas dimensions in pixels
    pub const CANVAS_WIDTH: f32 = 700.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Side length of one shape cell
    pub const BLOCK_SIZE: f32 = 20.0;

    /// Nominal display refresh rate (one tick per frame)
    pub const FRAME_RATE: u32 = 60;

    /// Player shape changes after this many seconds of ticks
    pub const SHAPE_ROTATION_SECS: u32 = 3;

    /// Width of the widest catalog shape, in blocks
    pub const SHAPE_SPAN_BLOCKS: f32 = 4.0;

    /// Enemies on the field after every reset
    pub const ENEMY_COUNT: usize = 8;

    /// Player horizontal speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player spawn offset from horizontal center / bottom edge
    pub const PLAYER_CENTER_OFFSET: f32 = 40.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

    /// Enemy fall speed range (pixels per tick), `[min, max)`
    pub const ENEMY_SPEED_MIN: f32 = 3.0;
    pub const ENEMY_SPEED_MAX: f32 = 6.0;

    /// Enemy spawn height, above the visible area
    pub const ENEMY_SPAWN_Y: f32 = -80.0;

    /// Score for eating a same-shape enemy
    pub const MATCH_SCORE: u32 = 10;

    /// Score overlay
    pub const SCORE_FONT: &str = "20px Arial";
    pub const SCORE_POS: (f32, f32) = (10.0, 30.0);

    /// Text of the blocking game-over notification
    pub const GAME_OVER_MESSAGE: &str = "Game Over";

    /// Platform key identifiers
    pub const KEY_LEFT: &str = "ArrowLeft";
    pub const KEY_RIGHT: &str = "ArrowRight";
}
