//! Endless Dodge - A falling-obstacle arcade game
//!
//! Core modules:
//! - `sim`: Simulation (geometry, obstacle pool, collisions, state machine)
//! - `game`: Simulation context paired with the high score store
//! - `driver`: Frame cadence, delta-time clamping and input aggregation
//! - `platform`: Clock and keyboard input translation
//! - `renderer`: Read-only frame view and draw list generation
//! - `highscores`: Best score persistence
//! - `settings` / `tuning`: Configuration and game balance

pub mod driver;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (reference balance)
pub mod consts {
    /// Target presentation rate
    pub const TARGET_FPS: u32 = 60;
    /// Largest delta-time fed into a single tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Horizontal speed in pixels per second
    pub const PLAYER_SPEED: f32 = 500.0;
    /// Gap between the player's bottom edge and the screen bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 40.0;

    /// Obstacle pool capacity
    pub const MAX_OBSTACLES: usize = 64;
    pub const OBSTACLE_MIN_WIDTH: f32 = 40.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 140.0;
    pub const OBSTACLE_HEIGHT: f32 = 20.0;
    pub const OBSTACLE_BASE_SPEED: f32 = 200.0;
    /// Fraction of base speed added per second of play
    pub const OBSTACLE_SPEED_INCREMENT: f32 = 0.03;
    /// Milliseconds between spawns at the start of a run
    pub const OBSTACLE_BASE_INTERVAL_MS: f32 = 700.0;
    pub const OBSTACLE_MIN_INTERVAL_MS: f32 = 140.0;
    /// Interval multiplier applied after each spawn
    pub const OBSTACLE_INTERVAL_DECAY: f32 = 0.985;

    /// Points per second while playing
    pub const TIME_SCORE_RATE: f32 = 20.0;
    /// Points for an obstacle leaving the bottom of the screen
    pub const DODGE_BONUS: u32 = 10;

    /// Default high score record location
    pub const HIGHSCORE_FILE: &str = "highscore.dat";
}
