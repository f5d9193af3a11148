//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so tests and
//! config files can reshape difficulty without touching the sim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Pixels per second
    pub player_speed: f32,
    pub player_bottom_margin: f32,

    // === Obstacles ===
    /// Pool capacity, also the maximum simultaneously active obstacles
    pub max_obstacles: usize,
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_height: f32,
    pub obstacle_base_speed: f32,
    /// Fraction of base speed gained per elapsed second
    pub obstacle_speed_increment: f32,
    pub spawn_interval_base_ms: f32,
    pub spawn_interval_min_ms: f32,
    pub spawn_interval_decay: f32,

    // === Scoring ===
    pub time_score_rate: f32,
    pub dodge_bonus: u32,
    /// Carry the fractional remainder of time score between ticks instead
    /// of truncating it away every tick
    pub carry_fractional_score: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,

            max_obstacles: MAX_OBSTACLES,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_max_width: OBSTACLE_MAX_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_base_speed: OBSTACLE_BASE_SPEED,
            obstacle_speed_increment: OBSTACLE_SPEED_INCREMENT,
            spawn_interval_base_ms: OBSTACLE_BASE_INTERVAL_MS,
            spawn_interval_min_ms: OBSTACLE_MIN_INTERVAL_MS,
            spawn_interval_decay: OBSTACLE_INTERVAL_DECAY,

            time_score_rate: TIME_SCORE_RATE,
            dodge_bonus: DODGE_BONUS,
            carry_fractional_score: false,
        }
    }
}

impl Tuning {
    /// Screen size as a vector
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Where a fresh player is placed: horizontally centered, lifted off the bottom
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width - self.player_width) / 2.0,
            self.screen_height - self.player_height - self.player_bottom_margin,
        )
    }

    /// Obstacle fall speed for a spawn happening `elapsed` seconds into the run
    pub fn obstacle_speed_at(&self, elapsed: f32) -> f32 {
        let boost = self.obstacle_speed_increment * elapsed * self.obstacle_base_speed;
        self.obstacle_base_speed + boost
    }

    /// Repair values that would break simulation invariants
    ///
    /// Returns the list of fields that were adjusted so callers can log them.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let mut fixed = Vec::new();
        let defaults = Tuning::default();

        if !(self.screen_width > 0.0) {
            self.screen_width = defaults.screen_width;
            fixed.push("screen_width");
        }
        if !(self.screen_height > 0.0) {
            self.screen_height = defaults.screen_height;
            fixed.push("screen_height");
        }
        if !(self.player_width > 0.0) {
            self.player_width = defaults.player_width.min(self.screen_width);
            fixed.push("player_width");
        } else if self.player_width > self.screen_width {
            self.player_width = self.screen_width;
            fixed.push("player_width");
        }
        if self.max_obstacles < MAX_OBSTACLES {
            self.max_obstacles = MAX_OBSTACLES;
            fixed.push("max_obstacles");
        }
        if !(self.obstacle_min_width > 0.0) {
            self.obstacle_min_width = defaults.obstacle_min_width;
            fixed.push("obstacle_min_width");
        }
        if self.obstacle_min_width > self.screen_width {
            self.obstacle_min_width = self.screen_width;
            fixed.push("obstacle_min_width");
        }
        if !(self.obstacle_max_width >= self.obstacle_min_width)
            || self.obstacle_max_width > self.screen_width
        {
            let max = if self.obstacle_max_width.is_nan() {
                defaults.obstacle_max_width
            } else {
                self.obstacle_max_width
            };
            self.obstacle_max_width = max.clamp(self.obstacle_min_width, self.screen_width);
            fixed.push("obstacle_max_width");
        }
        if !(self.spawn_interval_decay > 0.0 && self.spawn_interval_decay <= 1.0) {
            self.spawn_interval_decay = defaults.spawn_interval_decay;
            fixed.push("spawn_interval_decay");
        }
        if !(self.spawn_interval_base_ms > 0.0) {
            self.spawn_interval_base_ms = defaults.spawn_interval_base_ms;
            fixed.push("spawn_interval_base_ms");
        }
        if !(self.spawn_interval_min_ms >= 0.0) {
            self.spawn_interval_min_ms = defaults.spawn_interval_min_ms.min(self.spawn_interval_base_ms);
            fixed.push("spawn_interval_min_ms");
        } else if self.spawn_interval_min_ms > self.spawn_interval_base_ms {
            self.spawn_interval_min_ms = self.spawn_interval_base_ms;
            fixed.push("spawn_interval_min_ms");
        }

        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_is_centered() {
        let tuning = Tuning::default();
        let pos = tuning.player_spawn();
        assert_eq!(pos, Vec2::new(360.0, 540.0));
    }

    #[test]
    fn test_obstacle_speed_grows_linearly() {
        let tuning = Tuning::default();
        assert_eq!(tuning.obstacle_speed_at(0.0), 200.0);
        // 0.03 * 10s * 200 = 60
        assert!((tuning.obstacle_speed_at(10.0) - 260.0).abs() < 0.001);
    }

    #[test]
    fn test_sanitize_leaves_defaults_alone() {
        let mut tuning = Tuning::default();
        assert!(tuning.sanitize().is_empty());
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_sanitize_repairs_broken_ranges() {
        let mut tuning = Tuning {
            max_obstacles: 0,
            obstacle_max_width: 10.0,
            spawn_interval_decay: 1.5,
            ..Default::default()
        };
        let fixed = tuning.sanitize();
        assert!(fixed.contains(&"max_obstacles"));
        assert!(fixed.contains(&"obstacle_max_width"));
        assert!(fixed.contains(&"spawn_interval_decay"));
        assert!(tuning.obstacle_min_width <= tuning.obstacle_max_width);
        assert_eq!(tuning.max_obstacles, MAX_OBSTACLES);
    }

    #[test]
    fn test_sanitize_tiny_screen_keeps_bounds_ordered() {
        let mut tuning = Tuning {
            screen_width: 0.5,
            ..Default::default()
        };
        let fixed = tuning.sanitize();
        assert!(fixed.contains(&"player_width"));
        assert_eq!(tuning.player_width, 0.5);
        assert!(tuning.obstacle_min_width <= tuning.obstacle_max_width);
        assert!(tuning.obstacle_max_width <= tuning.screen_width);
    }

    #[test]
    fn test_sanitize_restores_negative_spawn_interval() {
        let mut tuning = Tuning {
            spawn_interval_base_ms: -5.0,
            ..Default::default()
        };
        let fixed = tuning.sanitize();
        assert_eq!(fixed, vec!["spawn_interval_base_ms"]);
        assert_eq!(tuning.spawn_interval_base_ms, OBSTACLE_BASE_INTERVAL_MS);
        assert_eq!(tuning.spawn_interval_min_ms, OBSTACLE_MIN_INTERVAL_MS);
    }

    #[test]
    fn test_sanitize_replaces_nan_values() {
        let mut tuning = Tuning {
            player_width: f32::NAN,
            obstacle_max_width: f32::NAN,
            spawn_interval_min_ms: f32::NAN,
            ..Default::default()
        };
        tuning.sanitize();
        assert_eq!(tuning.player_width, PLAYER_WIDTH);
        assert_eq!(tuning.obstacle_max_width, OBSTACLE_MAX_WIDTH);
        assert_eq!(tuning.spawn_interval_min_ms, OBSTACLE_MIN_INTERVAL_MS);
    }

    #[test]
    fn test_sanitize_raises_small_pool() {
        let mut tuning = Tuning {
            max_obstacles: 8,
            ..Default::default()
        };
        assert_eq!(tuning.sanitize(), vec!["max_obstacles"]);
        assert_eq!(tuning.max_obstacles, MAX_OBSTACLES);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "dodge_bonus": 25 }"#).unwrap();
        assert_eq!(tuning.dodge_bonus, 25);
        assert_eq!(tuning.player_speed, PLAYER_SPEED);
    }
}
