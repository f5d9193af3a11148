//! Game state and core simulation types
//!
//! The whole simulation context lives in [`GameState`]; nothing is global, so
//! any number of independent games can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, clamp};
use super::obstacles::ObstacleField;
use super::rng::GameRng;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

impl GamePhase {
    pub const ALL: [GamePhase; 4] = [
        GamePhase::Menu,
        GamePhase::Playing,
        GamePhase::Paused,
        GamePhase::GameOver,
    ];

    /// Label used in the window title
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "MENU",
            GamePhase::Playing => "PLAYING",
            GamePhase::Paused => "PAUSED",
            GamePhase::GameOver => "GAME OVER",
        }
    }
}

/// The player's paddle at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed in pixels per second
    pub speed: f32,
}

impl Player {
    /// Fresh player, centered above the bottom edge
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_spawn(),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            speed: tuning.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move horizontally and keep the player fully on screen
    ///
    /// Holding both directions cancels out.
    pub fn apply_movement(&mut self, move_left: bool, move_right: bool, dt: f32, screen_width: f32) {
        let mut dir = 0.0;
        if move_left {
            dir -= 1.0;
        }
        if move_right {
            dir += 1.0;
        }

        self.pos.x += dir * self.speed * dt;
        self.pos.x = clamp(self.pos.x, 0.0, (screen_width - self.size.x).max(0.0));
    }
}

/// A falling obstacle slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed in pixels per second
    pub speed: f32,
    pub active: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Score of the current (or last finished) run
    pub score: u32,
    /// Best score seen by this process, seeded from storage
    pub high_score: u32,
    /// Seconds spent in `Playing` during this run
    pub elapsed: f32,
    /// Fractional time score not yet credited (only with `carry_fractional_score`)
    pub score_remainder: f32,
    pub player: Player,
    pub obstacles: ObstacleField,
    /// Runs started since launch
    pub runs_started: u32,
    pub tuning: Tuning,
    pub rng: GameRng,
}

impl GameState {
    /// Create a game sitting in the menu
    pub fn new(tuning: Tuning, rng: GameRng, high_score: u32) -> Self {
        let player = Player::spawn(&tuning);
        let obstacles = ObstacleField::new(&tuning);
        Self {
            phase: GamePhase::Menu,
            score: 0,
            high_score,
            elapsed: 0.0,
            score_remainder: 0.0,
            player,
            obstacles,
            runs_started: 0,
            tuning,
            rng,
        }
    }

    /// Reset everything a new run starts from
    pub fn reset_run(&mut self, now_ms: u64) {
        self.score = 0;
        self.elapsed = 0.0;
        self.score_remainder = 0.0;
        self.player = Player::spawn(&self.tuning);
        self.obstacles.reset(now_ms, &self.tuning);
        self.runs_started += 1;
    }

    /// Credit time-based score for `dt` seconds of play
    ///
    /// Truncates per call unless the tuning asks to carry the remainder.
    pub fn add_time_score(&mut self, dt: f32) {
        let earned = dt * self.tuning.time_score_rate;
        if self.tuning.carry_fractional_score {
            let total = earned + self.score_remainder;
            let whole = total.floor();
            self.score_remainder = total - whole;
            self.score = self.score.saturating_add(whole as u32);
        } else {
            self.score = self.score.saturating_add(earned as u32);
        }
    }

    /// Whether the current score beats the stored best
    pub fn beats_high_score(&self) -> bool {
        self.score > self.high_score
    }
}
