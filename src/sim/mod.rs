//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `dt` and the clock reading passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geom;
pub mod obstacles;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{check_collision, first_collision};
pub use geom::{Rect, clamp, intersects};
pub use obstacles::{ObstacleField, Retired, SpawnOutcome};
pub use rng::{GameRng, RandomSource, ScriptedRandom, random_in_range};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{Action, Effect, GameEvent, TickInput, TickOutcome, apply_action, tick, transition};
